use super::config::SearchConfig;
use super::error::EngineError;
use super::progress::ProgressReporter;
use crate::core::io::render::{Frame, StateRenderer, frame_path};
use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use crate::core::scoring::Cost;
use std::path::Path;
use tracing::{trace, warn};

#[derive(Clone, Copy)]
pub struct Snapshots<'a> {
    pub renderer: &'a dyn StateRenderer,
    pub prefix: &'a str,
}

impl Snapshots<'_> {
    pub fn emit(&self, grid: &Grid, placement: &Placement, cost: Cost, index: usize) {
        let path = frame_path(self.prefix, index);
        // Render failures are logged and dropped.
        match self
            .renderer
            .render(&Frame::new(grid, placement, cost), Path::new(&path))
        {
            Ok(()) => trace!(path = %path, "Frame written."),
            Err(e) => warn!(path = %path, error = %e, "Failed to render frame; continuing search."),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub grid: &'a Grid,
    pub config: &'a SearchConfig,
    pub reporter: &'a ProgressReporter<'a>,
    pub snapshots: Option<Snapshots<'a>>,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        grid: &'a Grid,
        config: &'a SearchConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Result<Self, EngineError> {
        grid.validate()?;
        Ok(Self {
            grid,
            config,
            reporter,
            snapshots: None,
        })
    }

    pub fn with_snapshots(mut self, renderer: &'a dyn StateRenderer, prefix: &'a str) -> Self {
        self.snapshots = Some(Snapshots { renderer, prefix });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::render::RenderError;
    use crate::core::models::cell::Cell;
    use crate::core::models::grid::GridError;
    use std::sync::Mutex;

    struct FailingRenderer {
        attempts: Mutex<usize>,
    }

    impl StateRenderer for FailingRenderer {
        fn render(&self, _frame: &Frame<'_>, _path: &Path) -> Result<(), RenderError> {
            *self.attempts.lock().unwrap() += 1;
            Err(RenderError::Encoding("unsupported color type".to_string()))
        }
    }

    #[test]
    fn new_rejects_grid_without_room_for_hospitals() {
        let mut grid = Grid::new(1, 2, 2).unwrap();
        grid.add_house(Cell::new(0, 0)).unwrap();
        let config = SearchConfig::default();
        let reporter = ProgressReporter::new();

        let result = SearchContext::new(&grid, &config, &reporter);

        assert!(matches!(
            result,
            Err(EngineError::Grid {
                source: GridError::TooManyHospitals { .. }
            })
        ));
    }

    #[test]
    fn context_has_no_snapshots_by_default() {
        let grid = Grid::new(2, 2, 1).unwrap();
        let config = SearchConfig::default();
        let reporter = ProgressReporter::new();
        let context = SearchContext::new(&grid, &config, &reporter).unwrap();
        assert!(context.snapshots.is_none());
    }

    #[test]
    fn failing_renderer_is_swallowed() {
        let grid = Grid::new(2, 2, 1).unwrap();
        let config = SearchConfig::default();
        let reporter = ProgressReporter::new();
        let renderer = FailingRenderer {
            attempts: Mutex::new(0),
        };
        let context = SearchContext::new(&grid, &config, &reporter)
            .unwrap()
            .with_snapshots(&renderer, "frame");

        let placement = Placement::from_iter([Cell::new(0, 0)]);
        context.snapshots.unwrap().emit(&grid, &placement, 0, 0);
        context.snapshots.unwrap().emit(&grid, &placement, 0, 1);

        assert_eq!(*renderer.attempts.lock().unwrap(), 2);
    }
}
