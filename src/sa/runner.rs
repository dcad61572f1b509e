//! Annealing execution loop.

use super::config::AnnealSchedule;
use super::types::AnnealProblem;
use crate::error::Error;
use rand::Rng;

/// Snapshot handed to the progress observer at the update cadence.
///
/// Passed by value; the observer cannot touch engine-owned state.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Move attempts completed so far.
    pub step: usize,
    /// Total move attempts in the schedule.
    pub steps: usize,
    /// Temperature at the current step.
    pub temperature: f64,
    /// Energy of the currently accepted state.
    pub energy: f64,
    /// Lowest energy seen so far.
    pub best_energy: f64,
    /// Accepted moves so far (including improvements).
    pub accepted: usize,
    /// Strictly improving moves so far.
    pub improved: usize,
}

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best state seen. Its energy never exceeds the initial
    /// state's energy.
    pub best: S,

    /// Energy of the best state.
    pub best_energy: f64,

    /// Move attempts executed.
    pub steps: usize,

    /// Temperature at the last executed step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted: usize,

    /// Number of strictly improving moves.
    pub improved: usize,

    /// Best energy sampled at the update cadence.
    pub energy_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the schedule from `initial`, drawing randomness from the
    /// injected generator.
    pub fn run<P: AnnealProblem, R: Rng>(
        problem: &P,
        initial: P::State,
        schedule: &AnnealSchedule,
        rng: &mut R,
    ) -> Result<AnnealResult<P::State>, Error> {
        Self::run_observed(problem, initial, schedule, rng, None)
    }

    /// Runs the schedule with an optional progress observer, invoked
    /// every `updates`-th step.
    pub fn run_observed<P: AnnealProblem, R: Rng>(
        problem: &P,
        initial: P::State,
        schedule: &AnnealSchedule,
        rng: &mut R,
        mut observer: Option<&mut dyn FnMut(&Progress)>,
    ) -> Result<AnnealResult<P::State>, Error> {
        schedule.validate()?;

        let mut current = initial;
        let mut current_energy = problem.energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut accepted = 0usize;
        let mut improved = 0usize;
        let mut temperature = schedule.tmax;

        // Exponential cooling: T_i = tmax * (tmin/tmax)^(i/steps).
        let tfactor = (schedule.tmin / schedule.tmax).ln();

        let history_interval = if schedule.updates > 0 {
            schedule.updates
        } else {
            schedule.steps
        };
        let mut energy_history = vec![best_energy];

        for step in 0..schedule.steps {
            temperature =
                schedule.tmax * (tfactor * step as f64 / schedule.steps as f64).exp();

            let candidate = problem.neighbor(&current, temperature, rng);
            let candidate_energy = problem.energy(&candidate);
            let delta = candidate_energy - current_energy;

            // Metropolis criterion: non-worsening moves always pass,
            // worsening moves pass with probability exp(-delta / T).
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improved += 1;
                }
                true
            } else {
                rng.random_range(0.0..1.0) < (-delta / temperature).exp()
            };

            if accept {
                current = candidate;
                current_energy = candidate_energy;
                accepted += 1;

                if current_energy < best_energy {
                    best = current.clone();
                    best_energy = current_energy;
                }
            }

            let done = step + 1;
            if done.is_multiple_of(history_interval) {
                energy_history.push(best_energy);
            }
            if schedule.updates > 0 && done.is_multiple_of(schedule.updates) {
                if let Some(obs) = observer.as_deref_mut() {
                    obs(&Progress {
                        step: done,
                        steps: schedule.steps,
                        temperature,
                        energy: current_energy,
                        best_energy,
                        accepted,
                        improved,
                    });
                }
            }
        }

        if energy_history
            .last()
            .is_none_or(|&last| (last - best_energy).abs() > 1e-15)
        {
            energy_history.push(best_energy);
        }

        Ok(AnnealResult {
            best,
            best_energy,
            steps: schedule.steps,
            final_temperature: temperature,
            accepted,
            improved,
            energy_history,
        })
    }
}
