use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::models::grid::GridError;
use crate::core::scoring::ScoringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid grid: {source}")]
    Grid {
        #[from]
        source: GridError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Cost evaluation failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Random sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
