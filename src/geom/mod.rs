//! Plane geometry primitives.
//!
//! - [`Point`]: immutable 2D coordinate with vector arithmetic.
//! - [`Rect`]: axis-aligned bounds for absolute-frame operators.
//! - [`BaselineFrame`]: the rotated coordinate system in which path
//!   mutation happens. Rotating the baseline onto the x-axis turns the
//!   waypoint-ordering constraint into a strict x-monotonicity check.

mod frame;
mod point;
mod rect;

pub use frame::BaselineFrame;
pub use point::Point;
pub use rect::Rect;
