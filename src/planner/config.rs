//! Planner configuration.

use crate::error::Error;

/// Which frame operator the annealer draws moves from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Perturb one interior waypoint per move. Scales better with
    /// segmentation.
    #[default]
    SinglePoint,
    /// Perturb every interior waypoint per move.
    FullPath,
}

/// Configuration for the coarse-to-fine refinement loop.
///
/// Round `r` (zero-based) anneals with peak temperature
/// `tmax_scale / (r + 1)`; `tmin`, `steps`, and `updates` are held
/// fixed across rounds. The per-move Gaussian deviation is
/// `var_scale * temperature`, so moves shrink as each round cools.
///
/// # Examples
///
/// ```
/// use zonepath::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_rounds(6)
///     .with_steps(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Number of annealing rounds.
    pub rounds: usize,

    /// Baselines shorter than this skip annealing entirely and return
    /// the direct two-point path.
    pub short_circuit: f64,

    /// Whether to double the path resolution (midpoint insertion)
    /// between rounds.
    pub refine_midpoints: bool,

    /// Frame operator used for moves.
    pub move_kind: MoveKind,

    /// Gaussian deviation per unit of temperature.
    pub var_scale: f64,

    /// Perpendicular seeding range as a fraction of the baseline
    /// length.
    pub seed_spread: f64,

    /// Peak temperature of the first round.
    pub tmax_scale: f64,

    /// Final temperature of every round.
    pub tmin: f64,

    /// Move attempts per round.
    pub steps: usize,

    /// Progress-callback cadence in steps. 0 disables callbacks.
    pub updates: usize,

    /// Random seed for reproducibility. `None` draws one from the
    /// process RNG.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            rounds: 6,
            short_circuit: 200.0,
            refine_midpoints: true,
            move_kind: MoveKind::default(),
            var_scale: 10.0,
            seed_spread: 0.5,
            tmax_scale: 4.0,
            tmin: 0.01,
            steps: 1000,
            updates: 0,
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_short_circuit(mut self, threshold: f64) -> Self {
        self.short_circuit = threshold;
        self
    }

    pub fn with_refine_midpoints(mut self, refine: bool) -> Self {
        self.refine_midpoints = refine;
        self
    }

    pub fn with_move_kind(mut self, kind: MoveKind) -> Self {
        self.move_kind = kind;
        self
    }

    pub fn with_var_scale(mut self, scale: f64) -> Self {
        self.var_scale = scale;
        self
    }

    pub fn with_seed_spread(mut self, spread: f64) -> Self {
        self.seed_spread = spread;
        self
    }

    pub fn with_tmax_scale(mut self, scale: f64) -> Self {
        self.tmax_scale = scale;
        self
    }

    pub fn with_tmin(mut self, tmin: f64) -> Self {
        self.tmin = tmin;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_updates(mut self, updates: usize) -> Self {
        self.updates = updates;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including that the coolest round's
    /// peak temperature still sits above `tmin`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rounds == 0 {
            return Err(Error::InvalidSchedule("rounds must be positive".into()));
        }
        if self.steps == 0 {
            return Err(Error::InvalidSchedule("steps must be positive".into()));
        }
        if !(self.tmin > 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "tmin must be positive, got {}",
                self.tmin
            )));
        }
        let last_tmax = self.tmax_scale / self.rounds as f64;
        if last_tmax < self.tmin {
            return Err(Error::InvalidSchedule(format!(
                "tmax_scale {} puts round {} below tmin {}",
                self.tmax_scale,
                self.rounds - 1,
                self.tmin
            )));
        }
        if !(self.var_scale > 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "var_scale must be positive, got {}",
                self.var_scale
            )));
        }
        if !(self.seed_spread >= 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "seed_spread must not be negative, got {}",
                self.seed_spread
            )));
        }
        if !(self.short_circuit >= 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "short_circuit must not be negative, got {}",
                self.short_circuit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(PlannerConfig::default().with_rounds(0).validate().is_err());
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(PlannerConfig::default().with_steps(0).validate().is_err());
    }

    #[test]
    fn test_cold_final_round_rejected() {
        // Round 5 would run at tmax 0.05 / 6 < tmin 0.01.
        let config = PlannerConfig::default().with_tmax_scale(0.05);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nonpositive_tmin_rejected() {
        assert!(PlannerConfig::default().with_tmin(0.0).validate().is_err());
        assert!(PlannerConfig::default().with_tmin(-1.0).validate().is_err());
    }

    #[test]
    fn test_negative_spread_rejected() {
        let config = PlannerConfig::default().with_seed_spread(-0.1);
        assert!(config.validate().is_err());
    }
}
