use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    // None climbs until convergence.
    pub max_iterations: Option<usize>,
    pub restarts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            restarts: 1,
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    max_iterations: Option<usize>,
    restarts: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(mut self, iterations: Option<usize>) -> Self {
        self.max_iterations = iterations;
        self
    }
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = Some(restarts);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let restarts = self.restarts.unwrap_or(1);
        if restarts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "restarts",
                reason: "at least one restart is required".to_string(),
            });
        }
        Ok(SearchConfig {
            max_iterations: self.max_iterations,
            restarts,
        })
    }
}
