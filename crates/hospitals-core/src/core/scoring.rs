use super::models::grid::Grid;
use super::models::placement::Placement;
use thiserror::Error;

/// Total walking distance of a placement, in grid steps.
pub type Cost = usize;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoringError {
    #[error("Cannot score an empty hospital placement")]
    EmptyPlacement,
}

/// Sums, over every house, the Manhattan distance to its nearest hospital.
///
/// The result does not depend on the iteration order of either set. A grid without
/// houses costs zero. An empty placement has no nearest hospital and is rejected with
/// [`ScoringError::EmptyPlacement`] rather than scored as zero.
pub fn cost(grid: &Grid, placement: &Placement) -> Result<Cost, ScoringError> {
    if placement.is_empty() {
        return Err(ScoringError::EmptyPlacement);
    }

    let total = grid
        .houses()
        .iter()
        .map(|house| {
            placement
                .iter()
                .map(|hospital| house.manhattan_distance(hospital))
                .min()
                .unwrap_or_default()
        })
        .sum();

    Ok(total)
}
