mod columns;
mod error;
mod geometry;

pub use error::LayoutError;
pub use geometry::Frame;

use serde::Serialize;
use tracing::debug;

use crate::model::{Span, Timed, layout_order};

/// One input event plus its column assignment. `total_columns` travels with
/// every record so each placement can derive its own [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placed<E> {
    pub event: E,
    pub column: usize,
    pub column_span: usize,
    pub total_columns: usize,
}

impl<E: Timed> Placed<E> {
    /// Percentage box for this placement (see [`Frame`]).
    pub fn frame(&self) -> Frame {
        let span = self.event.span();
        Frame::from_columns(
            span.start,
            span.end,
            self.column,
            self.column_span,
            self.total_columns,
        )
    }
}

/// Lay out one day's timed events into side-by-side columns so that no two
/// overlapping events share a column.
///
/// Spans are validated up front; a single malformed event rejects the whole
/// call. The scan runs in canonical order (ascending start, ties by longer
/// duration first) — re-established here rather than trusted from the
/// caller, since assignment is order-sensitive — and the result comes back
/// in input order, one placement per event, nothing dropped or duplicated.
///
/// All-day events are the caller's to route elsewhere first (see
/// [`crate::model::split_all_day`]).
pub fn layout_day<E: Timed>(events: Vec<E>) -> Result<Vec<Placed<E>>, LayoutError> {
    for event in &events {
        event.span().validate()?;
    }
    if events.is_empty() {
        return Ok(Vec::new());
    }

    // Scan in canonical order, report in input order.
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| layout_order(events[a].span(), events[b].span()));
    let scan: Vec<Span> = order.iter().map(|&i| events[i].span()).collect();

    let (assigned, total_columns) = columns::assign_columns(&scan);

    let mut by_input = vec![(0usize, 0usize); events.len()];
    for (&original, &placement) in order.iter().zip(&assigned) {
        by_input[original] = placement;
    }

    debug!(events = events.len(), total_columns, "day laid out");

    Ok(events
        .into_iter()
        .zip(by_input)
        .map(|(event, (column, column_span))| Placed {
            event,
            column,
            column_span,
            total_columns,
        })
        .collect())
}
