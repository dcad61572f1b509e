//! Core trait for annealing problems.

use rand::Rng;

/// The move/energy contract the engine is parameterized with.
///
/// The engine owns acceptance, cooling, and best-tracking; the problem
/// supplies state perturbation and evaluation. The current temperature
/// is threaded explicitly into [`neighbor`](AnnealProblem::neighbor) so
/// temperature-dependent move sizes need no shared mutable context.
///
/// # Minimization
///
/// The engine minimizes energy. For maximization, negate it.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use zonepath::sa::AnnealProblem;
///
/// struct Quadratic;
///
/// impl AnnealProblem for Quadratic {
///     type State = f64;
///
///     fn energy(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, _temperature: f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait AnnealProblem: Send + Sync {
    /// The state representation type.
    type State: Clone + Send;

    /// Computes the energy of a state. Lower is better.
    fn energy(&self, state: &Self::State) -> f64;

    /// Produces a candidate state near the current one.
    ///
    /// The candidate should be a small perturbation, but the move set
    /// must be connected (any state reachable from any other via a
    /// sequence of moves).
    fn neighbor<R: Rng>(&self, state: &Self::State, temperature: f64, rng: &mut R)
        -> Self::State;
}
