//! Waypoint mutation operators.
//!
//! The frame operators ([`perturb_all`], [`perturb_one`]) expect the
//! complete rotated waypoint list, both anchors included, and touch
//! only interior points. Interior x-coordinates stay strictly between
//! the neighbors' x (one unit of margin on each side), which is the
//! path-ordering invariant in the baseline frame.
//!
//! The absolute-frame operators ([`jitter_all`], [`scatter_all`])
//! perturb interior points in world coordinates without an ordering
//! guarantee; they are exploratory moves for use with the generic
//! engine directly.

use crate::geom::{Point, Rect};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Gaussian-perturbs every interior point of a rotated waypoint list.
///
/// For each interior point, x is redrawn from `Normal(x, x_var)` and
/// clamped into `[left.x + 1, right.x - 1]`; when that interval is
/// empty or inverted the x-move is skipped. y is redrawn from
/// `Normal(y, y_var)` with no bound. Points are updated in order, so
/// each clamp sees its already-perturbed left neighbor.
pub fn perturb_all<R: Rng>(rframe: &mut [Point], x_var: f64, y_var: f64, rng: &mut R) {
    for i in 1..rframe.len().saturating_sub(1) {
        perturb_point(rframe, i, x_var, y_var, rng);
    }
}

/// Gaussian-perturbs exactly one interior point, chosen uniformly.
///
/// Same perturbation rule as [`perturb_all`]. Moving a single degree
/// of freedom per step keeps acceptance rates workable as the
/// segmentation grows.
pub fn perturb_one<R: Rng>(rframe: &mut [Point], x_var: f64, y_var: f64, rng: &mut R) {
    if rframe.len() < 3 {
        return;
    }
    let i = rng.random_range(1..rframe.len() - 1);
    perturb_point(rframe, i, x_var, y_var, rng);
}

fn perturb_point<R: Rng>(rframe: &mut [Point], i: usize, x_var: f64, y_var: f64, rng: &mut R) {
    let x_min = rframe[i - 1].x + 1.0;
    let x_max = rframe[i + 1].x - 1.0;
    if x_max > x_min {
        if let Ok(normal) = Normal::new(rframe[i].x, x_var) {
            rframe[i].x = normal.sample(rng).clamp(x_min, x_max);
        }
    }
    if let Ok(normal) = Normal::new(rframe[i].y, y_var) {
        rframe[i].y = normal.sample(rng);
    }
}

/// Gaussian-jitters each point with probability `threshold`, clamped
/// into `bounds`.
pub fn jitter_all<R: Rng>(
    points: &mut [Point],
    bounds: Rect,
    threshold: f64,
    x_var: f64,
    y_var: f64,
    rng: &mut R,
) {
    for p in points.iter_mut() {
        if rng.random_range(0.0..1.0) >= threshold {
            continue;
        }
        let mut moved = *p;
        if let Ok(normal) = Normal::new(p.x, x_var) {
            moved.x = normal.sample(rng);
        }
        if let Ok(normal) = Normal::new(p.y, y_var) {
            moved.y = normal.sample(rng);
        }
        *p = bounds.clamp(moved);
    }
}

/// Resamples each point uniformly within `bounds` with probability
/// `threshold`.
pub fn scatter_all<R: Rng>(points: &mut [Point], bounds: Rect, threshold: f64, rng: &mut R) {
    for p in points.iter_mut() {
        if rng.random_range(0.0..1.0) < threshold {
            *p = bounds.sample(rng);
        }
    }
}
