use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::state::{ClimbResult, Termination};
use crate::engine::tasks::hill_climb;
use rand::Rng;
use tracing::{info, instrument};

/// Runs a single hill climb from a random initial placement.
///
/// When the context carries snapshots, the initial placement and the placement after
/// every accepted move are rendered as consecutive frames.
#[instrument(skip_all, name = "climb_workflow")]
pub fn run<R: Rng>(context: &SearchContext, rng: &mut R) -> Result<ClimbResult, EngineError> {
    context.reporter.report(Progress::PhaseStart {
        name: "Hill Climbing",
    });
    info!(
        height = context.grid.height(),
        width = context.grid.width(),
        houses = context.grid.houses().len(),
        hospitals = context.grid.hospital_count(),
        "Starting hill climb from a random placement."
    );

    let result = hill_climb::run_from_random(context, rng, true)?;

    let summary = match result.termination {
        Termination::Converged => format!(
            "Converged after {} iteration(s) at cost {}.",
            result.iterations, result.cost
        ),
        Termination::IterationCapReached => format!(
            "Stopped at the iteration cap ({}) with cost {}.",
            result.iterations, result.cost
        ),
    };
    info!(
        iterations = result.iterations,
        cost = result.cost,
        termination = %result.termination,
        "Hill climb finished."
    );
    context.reporter.report(Progress::Message(summary));
    context.reporter.report(Progress::PhaseFinish);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::render::{Frame, RenderError, StateRenderer};
    use crate::core::models::cell::Cell;
    use crate::core::models::grid::Grid;
    use crate::engine::config::SearchConfig;
    use crate::engine::progress::ProgressReporter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    struct CountingRenderer(Mutex<usize>);

    impl StateRenderer for CountingRenderer {
        fn render(&self, _frame: &Frame<'_>, _path: &Path) -> Result<(), RenderError> {
            *self.0.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[test]
    fn line_example_reaches_optimal_cost() {
        let mut grid = Grid::new(1, 5, 1).unwrap();
        grid.add_house(Cell::new(0, 0)).unwrap();
        grid.add_house(Cell::new(0, 4)).unwrap();
        let config = SearchConfig::default();
        let reporter = ProgressReporter::new();
        let context = SearchContext::new(&grid, &config, &reporter).unwrap();

        for seed in 0..10 {
            let result = run(&context, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(result.cost, 4);
        }
    }

    #[test]
    fn reports_phase_lifecycle() {
        let grid = Grid::new(3, 3, 1).unwrap();
        let config = SearchConfig::default();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        let context = SearchContext::new(&grid, &config, &reporter).unwrap();

        run(&context, &mut StdRng::seed_from_u64(0)).unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(
            events.first(),
            Some(Progress::PhaseStart {
                name: "Hill Climbing"
            })
        ));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
    }

    #[test]
    fn renders_one_frame_per_state() {
        let mut grid = Grid::new(4, 4, 1).unwrap();
        grid.add_house(Cell::new(0, 0)).unwrap();
        let config = SearchConfig::default();
        let reporter = ProgressReporter::new();
        let renderer = CountingRenderer(Mutex::new(0));
        let context = SearchContext::new(&grid, &config, &reporter)
            .unwrap()
            .with_snapshots(&renderer, "frame");

        let result = run(&context, &mut StdRng::seed_from_u64(8)).unwrap();

        assert_eq!(*renderer.0.lock().unwrap(), result.iterations + 1);
        assert_eq!(result.cost, 1);
    }
}
