use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::layout::LayoutError;

/// Minutes since midnight — the only time unit.
pub type Minutes = i64;

/// Length of the day track.
pub const MINUTES_PER_DAY: Minutes = 1440;

/// Half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Minutes,
    pub end: Minutes,
}

impl Span {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Half-open overlap: touching endpoints do not collide.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Minutes) -> bool {
        self.start <= t && t < self.end
    }

    /// Returns true if `self` fully contains `other`.
    pub fn contains_span(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// An all-day span covers the whole track. Those belong in the flat
    /// all-day list, not in the column engine.
    pub fn is_all_day(&self) -> bool {
        self.start == 0 && self.end == MINUTES_PER_DAY
    }

    /// Check the span is non-empty and lies within the day. Rejected values
    /// are reported, never clamped.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.start < 0 || self.start >= MINUTES_PER_DAY {
            return Err(LayoutError::StartOutOfRange(self.start));
        }
        if self.end < 1 || self.end > MINUTES_PER_DAY {
            return Err(LayoutError::EndOutOfRange(self.end));
        }
        if self.start >= self.end {
            return Err(LayoutError::EmptySpan {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Anything carrying a span within one day. The layout engine is
/// payload-agnostic: implement this and `layout_day` carries the value
/// through untouched.
pub trait Timed {
    fn span(&self) -> Span;
}

impl Timed for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// Minimal owned event for callers without an event type of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvent {
    pub id: Ulid,
    pub span: Span,
    pub label: Option<String>,
}

impl DayEvent {
    pub fn new(span: Span) -> Self {
        Self {
            id: Ulid::new(),
            span,
            label: None,
        }
    }

    pub fn with_label(span: Span, label: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            span,
            label: Some(label.into()),
        }
    }
}

impl Timed for DayEvent {
    fn span(&self) -> Span {
        self.span
    }
}

/// Canonical scan order for column assignment: ascending start, ties broken
/// by descending duration (longer events first). Assignment only compares
/// each interval against the currently open group, so this order is
/// load-bearing, not cosmetic.
pub fn layout_order(a: Span, b: Span) -> Ordering {
    a.start.cmp(&b.start).then(b.end.cmp(&a.end))
}

/// Sort a day's events into the canonical scan order. `layout_day` applies
/// this ordering itself; the helper is for callers that want their own list
/// in the same order.
pub fn sort_for_layout<E: Timed>(events: &mut [E]) {
    events.sort_by(|a, b| layout_order(a.span(), b.span()));
}

/// Route a mixed day list into `(all_day, timed)`. The column engine lays
/// out only the timed set; the all-day list is rendered flat elsewhere.
pub fn split_all_day<E: Timed>(events: Vec<E>) -> (Vec<E>, Vec<E>) {
    events.into_iter().partition(|e| e.span().is_all_day())
}
