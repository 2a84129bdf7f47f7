//! daygrid — week-view calendar layout engine.
//!
//! Given one day's timed events (minutes since midnight), pack them into
//! side-by-side columns so overlapping events never stack, then derive
//! normalized percentage geometry for a rendering layer.
//!
//! ```
//! use daygrid::{DayEvent, Span, layout_day};
//!
//! let placed = layout_day(vec![
//!     DayEvent::new(Span::new(540, 660)),  // 09:00–11:00
//!     DayEvent::new(Span::new(600, 630)),  // 10:00–10:30
//! ])?;
//!
//! assert_eq!(placed[0].column, 0);
//! assert_eq!(placed[1].column, 1);
//! let frame = placed[0].frame(); // percentage insets for the renderer
//! assert_eq!(frame.top, 37.5);
//! # Ok::<(), daygrid::LayoutError>(())
//! ```
//!
//! The engine is pure and synchronous: no I/O, no shared state, one
//! independent call per rendered day. It performs no rendering and no
//! persistence; those stay with the caller.

pub mod layout;
pub mod model;

pub use layout::{Frame, LayoutError, Placed, layout_day};
pub use model::{
    DayEvent, MINUTES_PER_DAY, Minutes, Span, Timed, layout_order, sort_for_layout,
    split_all_day,
};
