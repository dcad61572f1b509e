//! Circular zone and circle/segment coverage.

use super::types::{Coverage, Zone};
use crate::error::Error;
use crate::geom::Point;

/// A circular zone with a permeability coefficient.
///
/// Immutable after construction. Construction rejects permeability 0
/// so the penalty division can never blow up mid-search.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleZone {
    center: Point,
    radius: f64,
    permeability: f64,
}

impl CircleZone {
    pub fn new(center: Point, radius: f64, permeability: f64) -> Result<Self, Error> {
        if permeability == 0.0 {
            return Err(Error::DegenerateZone { permeability });
        }
        Ok(Self {
            center,
            radius,
            permeability,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn permeability(&self) -> f64 {
        self.permeability
    }

    /// Whether `p` lies strictly inside the circle.
    pub fn contains(&self, p: Point) -> bool {
        let d = p - self.center;
        d.dot(d) < self.radius * self.radius
    }

    /// Whether the interiors of two circles overlap.
    pub fn overlaps(&self, other: &CircleZone) -> bool {
        self.center.dist(other.center) < self.radius + other.radius
    }

    /// Length of the intersection of segment `from -> to` with the
    /// circle interior.
    ///
    /// Classifies the endpoints first: two interior endpoints cover the
    /// whole segment. Otherwise solves the circle/line intersection in
    /// circle-centered coordinates (`dr^2 = dx^2 + dy^2`,
    /// `D = x1*y2 - x2*y1`, discriminant `r^2*dr^2 - D^2`), keeps the
    /// solutions whose fractional position along the segment lies in
    /// `[0, 1]`, appends any interior endpoint, and returns the distance
    /// between the two retained points. Tangent lines, misses, and
    /// zero-length segments all fall out as zero coverage.
    pub fn chord(&self, from: Point, to: Point) -> f64 {
        let from_in = self.contains(from);
        let to_in = self.contains(to);
        if from_in && to_in {
            return from.dist(to);
        }

        let c = self.center;
        let p1 = from - c;
        let p2 = to - c;
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let dr2 = dx * dx + dy * dy;
        let big_d = p1.x * p2.y - p2.x * p1.y;
        let discriminant = self.radius * self.radius * dr2 - big_d * big_d;
        if discriminant <= 0.0 {
            return 0.0;
        }
        let root = discriminant.sqrt();

        // Sign selection keeps the two solutions ordered along the
        // segment direction.
        let (signs, sx) = if dy < 0.0 {
            ([1.0, -1.0], -1.0)
        } else {
            ([-1.0, 1.0], 1.0)
        };

        let mut hits: [Point; 2] = [Point::default(); 2];
        let mut n = 0;
        for sign in signs {
            let hit = Point::new(
                c.x + (big_d * dy + sign * sx * dx * root) / dr2,
                c.y + (-big_d * dx + sign * dy.abs() * root) / dr2,
            );
            // Fractional position along the segment, via whichever
            // direction component is larger (avoids a near-zero divisor).
            let frac = if dx.abs() > dy.abs() {
                (hit.x - from.x) / dx
            } else {
                (hit.y - from.y) / dy
            };
            if (0.0..=1.0).contains(&frac) && n < 2 {
                hits[n] = hit;
                n += 1;
            }
        }
        if from_in && n < 2 {
            hits[n] = from;
            n += 1;
        }
        if to_in && n < 2 {
            hits[n] = to;
            n += 1;
        }

        if n < 2 {
            return 0.0;
        }
        hits[0].dist(hits[1])
    }
}

impl Zone for CircleZone {
    fn penalty(&self, from: Point, to: Point) -> Option<Coverage> {
        let length = self.chord(from, to);
        Some(Coverage {
            length,
            penalty: length / self.permeability,
        })
    }
}
