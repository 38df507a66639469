use hospitals::core::io::render::RenderError;
use hospitals::core::models::grid::GridError;
use hospitals::engine::config::ConfigError;
use hospitals::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    HospitalsCore(#[from] EngineError),

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
