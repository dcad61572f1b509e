//! Baseline-aligned coordinate frame.

use super::Point;
use crate::error::Error;

/// Rotation + translation taking the `base -> far` anchor vector onto
/// the positive x-axis, with `base` at the origin.
///
/// In frame coordinates the ordering constraint on a path's interior
/// waypoints reduces to strictly increasing x, which is what the
/// mutation operators rely on.
#[derive(Clone, Copy, Debug)]
pub struct BaselineFrame {
    base: Point,
    cos_a: f64,
    sin_a: f64,
    len: f64,
}

impl BaselineFrame {
    /// Builds the frame for the `base -> far` baseline.
    ///
    /// Fails with [`Error::DegenerateGeometry`] when the anchors
    /// coincide (zero-length baseline, rotation angle undefined).
    pub fn new(base: Point, far: Point) -> Result<Self, Error> {
        let len = base.dist(far);
        if len == 0.0 {
            return Err(Error::DegenerateGeometry);
        }
        Ok(Self {
            base,
            cos_a: (far.x - base.x) / len,
            sin_a: (far.y - base.y) / len,
            len,
        })
    }

    /// Baseline length. `far` maps to `(len, 0)` in frame coordinates.
    pub fn len(&self) -> f64 {
        self.len
    }

    /// World -> frame coordinates.
    pub fn to_frame(&self, p: Point) -> Point {
        let d = p - self.base;
        Point::new(
            d.x * self.cos_a + d.y * self.sin_a,
            d.y * self.cos_a - d.x * self.sin_a,
        )
    }

    /// Frame -> world coordinates.
    pub fn from_frame(&self, p: Point) -> Point {
        self.base
            + Point::new(
                p.x * self.cos_a - p.y * self.sin_a,
                p.x * self.sin_a + p.y * self.cos_a,
            )
    }
}
