//! Simulated annealing engine.
//!
//! A single-solution trajectory search. Worsening moves are accepted
//! with a probability that decays with temperature, letting the search
//! escape local optima; best-tracking keeps the lowest-energy state
//! seen regardless of where the trajectory wanders.
//!
//! The engine is domain-agnostic: it is parameterized by an injected
//! move/energy contract ([`AnnealProblem`]) and knows nothing about
//! paths or zones.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::AnnealSchedule;
pub use runner::{AnnealResult, AnnealRunner, Progress};
pub use types::AnnealProblem;
