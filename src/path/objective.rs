//! Path cost evaluation.

use crate::geom::Point;
use crate::zone::Zone;

/// Scores segments and paths against a fixed zone list.
///
/// A segment costs its Euclidean length, minus the length covered by
/// zones, plus each zone's penalty for that coverage. A zone with
/// permeability 1 therefore contributes exactly zero net; permeability
/// below 1 makes covered ground more expensive than open ground, above
/// 1 cheaper.
pub struct Objective<'a> {
    zones: &'a [Box<dyn Zone>],
}

impl<'a> Objective<'a> {
    pub fn new(zones: &'a [Box<dyn Zone>]) -> Self {
        Self { zones }
    }

    /// Cost of the single segment `from -> to`.
    pub fn segment(&self, from: Point, to: Point) -> f64 {
        let mut covered = 0.0;
        let mut penalty = 0.0;
        for zone in self.zones {
            if let Some(cov) = zone.penalty(from, to) {
                covered += cov.length;
                penalty += cov.penalty;
            }
        }
        from.dist(to) - covered + penalty
    }

    /// Total cost of a waypoint sequence: the sum over consecutive
    /// pairs.
    #[cfg(not(feature = "parallel"))]
    pub fn path(&self, points: &[Point]) -> f64 {
        points.windows(2).map(|w| self.segment(w[0], w[1])).sum()
    }

    /// Total cost of a waypoint sequence: the sum over consecutive
    /// pairs.
    ///
    /// Segments are scored in parallel but collected in index order and
    /// summed sequentially, so the result is bit-identical to the
    /// serial evaluation.
    #[cfg(feature = "parallel")]
    pub fn path(&self, points: &[Point]) -> f64 {
        use rayon::prelude::*;
        let costs: Vec<f64> = points
            .par_windows(2)
            .map(|w| self.segment(w[0], w[1]))
            .collect();
        costs.iter().sum()
    }
}
