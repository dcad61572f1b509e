//! Circular zones and the segment penalty model.
//!
//! A zone is a region of the plane that taxes (or discounts) the
//! portion of a path segment passing through it. The scoring contract
//! is [`Zone::penalty`]: the covered length of the segment together
//! with `covered / permeability`. Zones without a cost effect report
//! `None` and are ignored by the objective.
//!
//! Permeability semantics:
//!
//! - `1`: cost-neutral (net contribution is exactly zero)
//! - `<1`: crossing costs more than open ground
//! - `>1`: a shortcut; crossing costs less
//! - `<0`: accepted; amplifies the penalty with its reciprocal sign
//! - `0`: rejected at construction (division by zero)

mod circle;
mod types;

pub use circle::CircleZone;
pub use types::{Coverage, InertZone, Zone};
