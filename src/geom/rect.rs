//! Axis-aligned rectangular bounds.

use super::Point;
use rand::Rng;

/// World-coordinate bounds used by the absolute-frame operators and
/// the scatter seeder.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Invariant: `min.x <= max.x` and `min.y <= max.y`.
    pub fn new(min: Point, max: Point) -> Self {
        assert!(min.x <= max.x && min.y <= max.y, "inverted bounds");
        Self { min, max }
    }

    /// Clamps `p` componentwise into the bounds.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Samples a point uniformly within the bounds.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let x = if self.max.x > self.min.x {
            rng.random_range(self.min.x..self.max.x)
        } else {
            self.min.x
        };
        let y = if self.max.y > self.min.y {
            rng.random_range(self.min.y..self.max.y)
        } else {
            self.min.y
        };
        Point::new(x, y)
    }
}
