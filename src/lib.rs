//! Cost-minimizing 2D path planning across permeable circular zones.
//!
//! Given two fixed endpoints and a set of circular zones that tax (or
//! discount) the distance covered inside them, the planner searches for
//! a waypoint path of near-minimal total cost using simulated
//! annealing over a coarse-to-fine refinement schedule.
//!
//! The crate is organized leaves-first:
//!
//! - **geom**: points, rectangular bounds, and the baseline-aligned
//!   coordinate frame that turns path ordering into x-monotonicity.
//! - **zone**: the segment/circle coverage model and the permeability
//!   penalty contract.
//! - **path**: waypoint sequences with cached cost, and the objective
//!   that scores them against the zone list.
//! - **sa**: a domain-agnostic annealing engine parameterized by an
//!   injected move/energy contract.
//! - **planner**: mutation operators, path seeding, and the refinement
//!   loop that drives the engine across rounds of decreasing peak
//!   temperature, doubling path resolution between rounds.
//!
//! Rendering, map parsing, and command-line handling are deliberately
//! outside this crate: callers supply endpoints, zone objects, and a
//! configuration, and get back a path plus its cost.
//!
//! # Examples
//!
//! ```
//! use zonepath::geom::Point;
//! use zonepath::planner::{PathPlanner, PlannerConfig};
//! use zonepath::zone::{CircleZone, Zone};
//!
//! let zones: Vec<Box<dyn Zone>> = vec![Box::new(
//!     CircleZone::new(Point::new(300.0, 0.0), 80.0, 0.2).unwrap(),
//! )];
//! let config = PlannerConfig::default().with_seed(42);
//!
//! let path = PathPlanner::plan(
//!     Point::new(0.0, 0.0),
//!     Point::new(600.0, 0.0),
//!     &zones,
//!     &config,
//! )
//! .unwrap();
//! assert!(path.cost() >= 600.0);
//! ```

pub mod error;
pub mod geom;
pub mod path;
pub mod planner;
pub mod sa;
pub mod zone;

pub use error::Error;
