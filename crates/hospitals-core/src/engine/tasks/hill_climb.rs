use crate::core::models::placement::Placement;
use crate::core::scoring;
use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::state::{ClimbResult, SearchState, Termination};
use crate::engine::tasks::neighborhood;
use crate::engine::utils::sampling;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Draws a random initial placement and climbs from it.
pub fn run_from_random<R: Rng>(
    context: &SearchContext,
    rng: &mut R,
    record_frames: bool,
) -> Result<ClimbResult, EngineError> {
    let initial = sampling::random_placement(context.grid, rng)?;
    run(context, initial, rng, record_frames)
}

/// Steepest-descent hill climbing from `initial`.
///
/// Every iteration scores all single-hospital moves, collects every move achieving the
/// lowest trial cost, and, if that cost is strictly below the current one, replaces the
/// current placement with one of the tied moves chosen uniformly at random. The run
/// converges as soon as no move strictly improves, which may happen before the first
/// move. If `context.config.max_iterations` is set, at most that many moves are taken.
/// The run reports [`Termination::IterationCapReached`] only when the cap blocks an
/// improving move, so a run that lands on a local optimum with its last allowed move
/// still converges.
///
/// With `record_frames` set and snapshots configured, the initial placement is rendered
/// as frame 0 and the placement after move `i` as frame `i`.
#[instrument(skip_all, name = "hill_climb_task", fields(hospitals = initial.len()))]
pub fn run<R: Rng>(
    context: &SearchContext,
    initial: Placement,
    rng: &mut R,
    record_frames: bool,
) -> Result<ClimbResult, EngineError> {
    let grid = context.grid;
    check_placement(context, &initial)?;
    let frames = context.snapshots.filter(|_| record_frames);

    let initial_cost = scoring::cost(grid, &initial)?;
    let mut state = SearchState {
        placement: initial,
        cost: initial_cost,
    };
    let mut cost_history = vec![state.cost];
    let mut iterations = 0;

    info!(cost = state.cost, "Initial state.");
    if let Some(frames) = frames {
        frames.emit(grid, &state.placement, state.cost, iterations);
    }

    let termination = loop {
        let best = neighborhood::best_moves(neighborhood::evaluate_moves(
            grid,
            &state.placement,
        )?);
        let improves = best.first().is_some_and(|c| c.cost < state.cost);
        if !improves {
            debug!(
                iterations,
                cost = state.cost,
                ties = best.len(),
                "No strictly improving move; converged."
            );
            break Termination::Converged;
        }

        if context
            .config
            .max_iterations
            .is_some_and(|max| iterations >= max)
        {
            debug!(iterations, "Iteration cap reached before convergence.");
            break Termination::IterationCapReached;
        }

        let chosen = sampling::choose_uniform(&best, rng)?;
        state = SearchState {
            placement: chosen.placement.clone(),
            cost: chosen.cost,
        };
        iterations += 1;
        cost_history.push(state.cost);

        info!(
            iteration = iterations,
            cost = state.cost,
            from = %chosen.step.from,
            to = %chosen.step.to,
            ties = best.len(),
            "Found better neighbor."
        );
        context.reporter.report(Progress::StatusUpdate {
            text: format!("Iteration {}, cost {}", iterations, state.cost),
        });
        if let Some(frames) = frames {
            frames.emit(grid, &state.placement, state.cost, iterations);
        }
    };

    Ok(ClimbResult {
        placement: state.placement,
        cost: state.cost,
        iterations,
        termination,
        cost_history,
    })
}

fn check_placement(context: &SearchContext, placement: &Placement) -> Result<(), EngineError> {
    let grid = context.grid;
    if placement.len() != grid.hospital_count() {
        return Err(EngineError::Internal(format!(
            "placement holds {} hospitals, expected {}",
            placement.len(),
            grid.hospital_count()
        )));
    }
    if let Some(cell) = placement
        .iter()
        .find(|cell| !grid.contains(cell) || grid.is_house(cell))
    {
        return Err(EngineError::Internal(format!(
            "hospital at {} is off the grid or on a house",
            cell
        )));
    }
    Ok(())
}
