//! Waypoint paths and the path objective.
//!
//! A [`Path`] is an ordered waypoint sequence whose first and last
//! points are the fixed query endpoints; it carries its objective value
//! so the annealing engine never re-scores a state it already holds.
//! The [`Objective`] combines raw Euclidean travel distance with the
//! zone penalties of every consecutive waypoint pair.

mod objective;

pub use objective::Objective;

use crate::geom::Point;

/// An ordered waypoint sequence with its cached objective value.
///
/// Every constructor recomputes the cost, and the fields are not
/// otherwise writable, so the cache cannot go stale. Invariant:
/// at least two points; the endpoints are never moved by operators.
#[derive(Clone, Debug)]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
}

impl Path {
    /// Builds a path and scores it.
    ///
    /// # Panics
    /// Panics if fewer than two points are given.
    pub fn new(points: Vec<Point>, objective: &Objective<'_>) -> Self {
        assert!(points.len() >= 2, "a path needs both endpoints");
        let cost = objective.path(&points);
        Self { points, cost }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of free interior waypoints.
    pub fn segmentation(&self) -> usize {
        self.points.len() - 2
    }

    /// Doubles the path resolution by inserting the midpoint of every
    /// consecutive pair. The polyline shape is unchanged; the new
    /// points are raw material for the next annealing round.
    pub fn with_midpoints(&self, objective: &Objective<'_>) -> Path {
        let mut refined = Vec::with_capacity(self.points.len() * 2 - 1);
        refined.push(self.points[0]);
        for pair in self.points.windows(2) {
            refined.push(pair[0].midpoint(pair[1]));
            refined.push(pair[1]);
        }
        Path::new(refined, objective)
    }
}
