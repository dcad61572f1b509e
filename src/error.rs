//! Crate error taxonomy.
//!
//! Structural configuration errors are surfaced to the caller before any
//! search work starts. Per-move geometric edge cases (tangent circles,
//! inverted clamp bounds, zero-length direction components) are handled
//! locally with fallback values and never abort a run in progress.

use std::fmt;

/// Errors reported by configuration validation and constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An annealing schedule or planner configuration is structurally
    /// invalid (`tmax < tmin`, `tmin <= 0`, `steps == 0`, ...).
    InvalidSchedule(String),

    /// A zone was constructed with permeability 0, which would divide
    /// by zero in every penalty evaluation.
    DegenerateZone {
        /// The rejected permeability value.
        permeability: f64,
    },

    /// The two baseline anchors coincide, leaving the rotation angle
    /// undefined.
    DegenerateGeometry,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSchedule(msg) => write!(f, "invalid schedule: {msg}"),
            Error::DegenerateZone { permeability } => {
                write!(f, "degenerate zone: permeability {permeability} is not usable")
            }
            Error::DegenerateGeometry => {
                write!(f, "degenerate geometry: baseline anchors coincide")
            }
        }
    }
}

impl std::error::Error for Error {}
