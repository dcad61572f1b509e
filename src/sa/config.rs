//! Annealing schedule.

use crate::error::Error;

/// Cooling schedule and step budget for one annealing run.
///
/// Temperature decays exponentially from `tmax` to `tmin` over `steps`
/// move attempts: `T_i = tmax * (tmin/tmax)^(i/steps)`. With
/// `tmax == tmin` the temperature is constant and the run degenerates
/// to stochastic hill-climbing.
///
/// # Examples
///
/// ```
/// use zonepath::sa::AnnealSchedule;
///
/// let schedule = AnnealSchedule::default()
///     .with_tmax(4.0)
///     .with_tmin(0.01)
///     .with_steps(1000)
///     .with_updates(100);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealSchedule {
    /// Initial (peak) temperature.
    pub tmax: f64,

    /// Final temperature.
    pub tmin: f64,

    /// Total number of move attempts.
    pub steps: usize,

    /// Progress-callback cadence in steps. 0 disables callbacks.
    pub updates: usize,
}

impl Default for AnnealSchedule {
    fn default() -> Self {
        Self {
            tmax: 100.0,
            tmin: 1.0,
            steps: 340,
            updates: 100,
        }
    }
}

impl AnnealSchedule {
    pub fn with_tmax(mut self, tmax: f64) -> Self {
        self.tmax = tmax;
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

    /// Validates the schedule. Invariant: `tmax >= tmin > 0`,
    /// `steps > 0`.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.tmin > 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "tmin must be positive, got {}",
                self.tmin
            )));
        }
        if self.tmax < self.tmin {
            return Err(Error::InvalidSchedule(format!(
                "tmax {} must not be below tmin {}",
                self.tmax, self.tmin
            )));
        }
        if self.steps == 0 {
            return Err(Error::InvalidSchedule("steps must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = AnnealSchedule::default();
        assert!((schedule.tmax - 100.0).abs() < 1e-10);
        assert!((schedule.tmin - 1.0).abs() < 1e-10);
        assert_eq!(schedule.steps, 340);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_tmin() {
        let schedule = AnnealSchedule::default().with_tmin(0.0);
        assert!(schedule.validate().is_err());
        let schedule = AnnealSchedule::default().with_tmin(-1.0);
        assert!(schedule.validate().is_err());
        let schedule = AnnealSchedule::default().with_tmin(f64::NAN);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tmax_below_tmin() {
        let schedule = AnnealSchedule::default().with_tmax(0.5).with_tmin(1.0);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_flat_schedule() {
        let schedule = AnnealSchedule::default().with_tmax(1.0).with_tmin(1.0);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_steps() {
        let schedule = AnnealSchedule::default().with_steps(0);
        assert!(schedule.validate().is_err());
    }
}
