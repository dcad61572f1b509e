//! Core trait for zone cost scoring.

use crate::geom::Point;

/// How much of a segment a zone covers, and what that coverage costs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coverage {
    /// Length of the segment's intersection with the zone interior.
    pub length: f64,
    /// Cost contribution: `length / permeability`.
    pub penalty: f64,
}

/// A region of the map that may impose a traversal cost.
///
/// Implementors return `None` when they carry no cost capability;
/// such zones are inert decorations as far as the objective is
/// concerned.
pub trait Zone: Send + Sync {
    /// Scores the segment `from -> to` against this zone.
    fn penalty(&self, from: Point, to: Point) -> Option<Coverage>;
}

/// A zone with no cost effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertZone;

impl Zone for InertZone {
    fn penalty(&self, _from: Point, _to: Point) -> Option<Coverage> {
        None
    }
}
