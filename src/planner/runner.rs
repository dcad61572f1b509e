//! The coarse-to-fine refinement loop.

use super::config::{MoveKind, PlannerConfig};
use super::mutate::{perturb_all, perturb_one};
use super::seed::seed_baseline;
use crate::error::Error;
use crate::geom::{BaselineFrame, Point};
use crate::path::{Objective, Path};
use crate::sa::{AnnealProblem, AnnealRunner, AnnealSchedule, Progress};
use crate::zone::Zone;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Snapshot handed to the planner's progress observer.
#[derive(Debug, Clone, Copy)]
pub struct RoundProgress {
    /// Zero-based refinement round.
    pub round: usize,
    /// Move attempts completed within the round.
    pub step: usize,
    /// Temperature at the current step.
    pub temperature: f64,
    /// Cost of the currently accepted path.
    pub cost: f64,
    /// Lowest cost seen so far in the round.
    pub best_cost: f64,
}

/// The annealing problem one round solves: paths perturbed in the
/// baseline frame, scored by the zone objective.
struct RouteProblem<'a> {
    objective: &'a Objective<'a>,
    from: Point,
    to: Point,
    frame: BaselineFrame,
    move_kind: MoveKind,
    var_scale: f64,
}

impl AnnealProblem for RouteProblem<'_> {
    type State = Path;

    fn energy(&self, state: &Path) -> f64 {
        state.cost()
    }

    fn neighbor<R: Rng>(&self, state: &Path, temperature: f64, rng: &mut R) -> Path {
        let mut rframe: Vec<Point> = state
            .points()
            .iter()
            .map(|&p| self.frame.to_frame(p))
            .collect();

        let var = self.var_scale * temperature;
        match self.move_kind {
            MoveKind::SinglePoint => perturb_one(&mut rframe, var, var, rng),
            MoveKind::FullPath => perturb_all(&mut rframe, var, var, rng),
        }

        // Rebuild in world coordinates, pinning the anchors exactly.
        let mut world = Vec::with_capacity(rframe.len());
        world.push(self.from);
        for &q in &rframe[1..rframe.len() - 1] {
            world.push(self.frame.from_frame(q));
        }
        world.push(self.to);
        Path::new(world, self.objective)
    }
}

/// Computes a cost-minimizing path between two fixed endpoints.
pub struct PathPlanner;

impl PathPlanner {
    /// Plans a path from `from` to `to` across `zones`.
    ///
    /// Baselines shorter than the configured short-circuit
    /// threshold (coincident endpoints included) return the direct
    /// two-point path without annealing.
    pub fn plan(
        from: Point,
        to: Point,
        zones: &[Box<dyn Zone>],
        config: &PlannerConfig,
    ) -> Result<Path, Error> {
        Self::plan_observed(from, to, zones, config, None)
    }

    /// Plans with an optional progress observer, invoked at the
    /// configured update cadence of every round.
    pub fn plan_observed(
        from: Point,
        to: Point,
        zones: &[Box<dyn Zone>],
        config: &PlannerConfig,
        mut observer: Option<&mut dyn FnMut(&RoundProgress)>,
    ) -> Result<Path, Error> {
        config.validate()?;
        let objective = Objective::new(zones);

        // Coincident endpoints leave the rotation angle undefined;
        // the zero-length path costs nothing by construction.
        if from == to {
            return Ok(Path::new(vec![from, to], &objective));
        }
        if from.dist(to) < config.short_circuit {
            return Ok(Path::new(vec![from, to], &objective));
        }

        let frame = BaselineFrame::new(from, to)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let interior = seed_baseline(&frame, 1, config.seed_spread, &mut rng);
        let mut points = Vec::with_capacity(interior.len() + 2);
        points.push(from);
        points.extend(interior);
        points.push(to);
        let mut path = Path::new(points, &objective);

        let problem = RouteProblem {
            objective: &objective,
            from,
            to,
            frame,
            move_kind: config.move_kind,
            var_scale: config.var_scale,
        };

        for round in 0..config.rounds {
            let schedule = AnnealSchedule::default()
                .with_tmax(config.tmax_scale / (round + 1) as f64)
                .with_tmin(config.tmin)
                .with_steps(config.steps)
                .with_updates(config.updates);

            let mut hook = |p: &Progress| {
                if let Some(obs) = observer.as_deref_mut() {
                    obs(&RoundProgress {
                        round,
                        step: p.step,
                        temperature: p.temperature,
                        cost: p.energy,
                        best_cost: p.best_energy,
                    });
                }
            };
            let result =
                AnnealRunner::run_observed(&problem, path, &schedule, &mut rng, Some(&mut hook))?;
            path = result.best;

            // Midpoint insertion doubles the resolution for the next,
            // cooler round; it leaves the polyline (and cost) as is.
            if config.refine_midpoints && round + 1 < config.rounds {
                path = path.with_midpoints(&objective);
            }
        }

        Ok(path)
    }
}
