//! Evasive placement of the decline button
//!
//! Pure geometry with no DOM access:
//! - Layout is read through the [`LayoutProbe`] capability
//! - Randomness comes from an injected [`UnitSource`](crate::UnitSource)
//! - Every call is stateless; nothing is cached between calls

pub mod engine;
pub mod probe;
pub mod rect;

pub use engine::{AxisRange, PlacementParams, place_control, place_with_probe};
pub use probe::{FixedLayout, LayoutProbe};
pub use rect::{Rect, Size};
