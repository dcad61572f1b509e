//! Path planner: mutation operators, seeding, and the coarse-to-fine
//! refinement loop.
//!
//! The planner rotates candidate paths into the baseline frame (the
//! anchor-to-anchor vector on the positive x-axis), perturbs interior
//! waypoints there, and anneals across rounds of decreasing peak
//! temperature. Between rounds the path resolution doubles by midpoint
//! insertion, so early rounds settle the coarse route and later rounds
//! polish the detail.

mod config;
mod mutate;
mod runner;
mod seed;

pub use config::{MoveKind, PlannerConfig};
pub use mutate::{jitter_all, perturb_all, perturb_one, scatter_all};
pub use runner::{PathPlanner, RoundProgress};
pub use seed::{seed_baseline, seed_scatter, seed_straight};
