use crate::core::models::placement::Placement;
use crate::core::scoring::Cost;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged,
    IterationCapReached,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "converged"),
            Termination::IterationCapReached => write!(f, "iteration cap reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub placement: Placement,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbResult {
    pub placement: Placement,
    pub cost: Cost,
    // accepted moves
    pub iterations: usize,
    pub termination: Termination,
    pub cost_history: Vec<Cost>,
}

impl ClimbResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
