use thiserror::Error;

use crate::model::Minutes;

/// Rejection of a malformed input span. Checked up front, before any column
/// assignment, so a bad interval never produces partial output. Values are
/// reported as given, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("start out of range: {0}")]
    StartOutOfRange(Minutes),
    #[error("end out of range: {0}")]
    EndOutOfRange(Minutes),
    #[error("empty span: [{start}, {end})")]
    EmptySpan { start: Minutes, end: Minutes },
}
