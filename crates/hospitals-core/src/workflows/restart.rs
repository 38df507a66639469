use crate::core::scoring::Cost;
use crate::engine::config::ConfigError;
use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::state::ClimbResult;
use crate::engine::tasks::hill_climb;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartResult {
    /// The cheapest run; on equal cost, the earliest.
    pub best: ClimbResult,
    /// Index of the run that produced `best`.
    pub best_restart: usize,
    /// Final cost of every run, in restart order.
    pub restart_costs: Vec<Cost>,
}

/// Repeats hill climbing `context.config.restarts` times from independent random
/// placements and keeps the cheapest result.
///
/// A per-restart seed is drawn from `rng` up front, and each restart climbs with its
/// own `StdRng`. The results are then folded in restart order, and a later run replaces
/// the best only when it is strictly cheaper. Because of this, the answer does not
/// depend on whether the restarts ran sequentially or on the rayon pool (`parallel`
/// feature).
///
/// With snapshots configured, the result of restart `i` is rendered as frame `i`.
#[instrument(skip_all, name = "restart_workflow", fields(restarts = context.config.restarts))]
pub fn run<R: Rng>(context: &SearchContext, rng: &mut R) -> Result<RestartResult, EngineError> {
    let restarts = context.config.restarts;
    if restarts == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "restarts",
            reason: "at least one restart is required".to_string(),
        }
        .into());
    }

    context.reporter.report(Progress::PhaseStart {
        name: "Random Restart",
    });
    info!(restarts, "Starting random-restart hill climbing.");

    let seeds: Vec<u64> = (0..restarts).map(|_| rng.next_u64()).collect();
    let results = climb_all(context, &seeds);

    let mut restart_costs = Vec::with_capacity(restarts);
    let mut best: Option<(usize, ClimbResult)> = None;

    for (i, result) in results.into_iter().enumerate() {
        let result = result?;
        restart_costs.push(result.cost);

        if let Some(frames) = context.snapshots {
            frames.emit(context.grid, &result.placement, result.cost, i);
        }

        if best.as_ref().is_none_or(|(_, b)| result.cost < b.cost) {
            info!(restart = i, cost = result.cost, "Found new best state.");
            context.reporter.report(Progress::Message(format!(
                "{}: Found new best state: cost {}",
                i, result.cost
            )));
            best = Some((i, result));
        } else {
            info!(restart = i, cost = result.cost, "Found state.");
        }
    }

    let (best_restart, best) =
        best.ok_or_else(|| EngineError::Internal("no restart produced a result".to_string()))?;

    info!(
        best_restart,
        cost = best.cost,
        "Random restart finished."
    );
    context.reporter.report(Progress::PhaseFinish);

    Ok(RestartResult {
        best,
        best_restart,
        restart_costs,
    })
}

fn climb_all(context: &SearchContext, seeds: &[u64]) -> Vec<Result<ClimbResult, EngineError>> {
    context.reporter.report(Progress::TaskStart {
        total_steps: seeds.len() as u64,
    });

    let climb = |&seed: &u64| {
        let mut worker_rng = StdRng::seed_from_u64(seed);
        let result = hill_climb::run_from_random(context, &mut worker_rng, false);
        context.reporter.report(Progress::TaskIncrement);
        result
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = seeds.iter().map(climb).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<_> = seeds.par_iter().map(climb).collect();

    context.reporter.report(Progress::TaskFinish);
    results
}
