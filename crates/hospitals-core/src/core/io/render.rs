use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use crate::core::scoring::Cost;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while writing frame: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode frame: {0}")]
    Encoding(String),
}

/// A snapshot of the search handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub placement: &'a Placement,
    pub cost: Cost,
}

impl<'a> Frame<'a> {
    pub fn new(grid: &'a Grid, placement: &'a Placement, cost: Cost) -> Self {
        Self {
            grid,
            placement,
            cost,
        }
    }
}

/// Defines the interface for writing a grid state to a file.
///
/// Implementors draw the cells, the houses and hospitals of the frame, and its cost
/// label. Renderers are shared between restart workers, hence `Send + Sync`.
pub trait StateRenderer: Send + Sync {
    /// Renders `frame` and writes the result to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be drawn or written. Callers treat this as
    /// a diagnostic only; a failed frame never affects the search.
    fn render(&self, frame: &Frame<'_>, path: &Path) -> Result<(), RenderError>;
}

/// Builds the path of a numbered frame: `<prefix>` followed by a three-digit index and
/// `.png`, e.g. `hospitals007.png`.
pub fn frame_path(prefix: &str, index: usize) -> String {
    format!("{}{:03}.png", prefix, index)
}
