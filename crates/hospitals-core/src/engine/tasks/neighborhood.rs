use crate::core::models::cell::Cell;
use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use crate::core::scoring::{self, Cost, ScoringError};
use tracing::{instrument, trace};

/// A single hospital stepping to an adjacent free cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

/// A trial placement reached by one move, together with its cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub step: Move,
    pub placement: Placement,
    pub cost: Cost,
}

/// Builds and scores every placement one move away from `placement`.
///
/// For every hospital `h` and every cell `n` returned by [`Grid::neighbors`], the trial
/// placement `(placement \ {h}) ∪ {n}` is constructed and costed. The result is empty
/// only when every hospital is boxed in by houses, other hospitals, or the grid edge.
#[instrument(level = "trace", skip_all, fields(hospitals = placement.len()))]
pub fn evaluate_moves(grid: &Grid, placement: &Placement) -> Result<Vec<Candidate>, ScoringError> {
    let mut candidates = Vec::with_capacity(placement.len() * 4);
    for &hospital in placement {
        for replacement in grid.neighbors(hospital, placement) {
            let trial = placement.with_moved(hospital, replacement);
            let cost = scoring::cost(grid, &trial)?;
            candidates.push(Candidate {
                step: Move {
                    from: hospital,
                    to: replacement,
                },
                placement: trial,
                cost,
            });
        }
    }
    trace!(count = candidates.len(), "Neighbourhood evaluated.");
    Ok(candidates)
}

/// Keeps every candidate achieving the minimum cost.
///
/// Ties are all retained; choosing among them is left to the caller so that the choice
/// can be randomized.
pub fn best_moves(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let Some(min_cost) = candidates.iter().map(|c| c.cost).min() else {
        return Vec::new();
    };
    candidates
        .into_iter()
        .filter(|c| c.cost == min_cost)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_houses(
        height: usize,
        width: usize,
        hospitals: usize,
        houses: &[(usize, usize)],
    ) -> Grid {
        let mut grid = Grid::new(height, width, hospitals).unwrap();
        for &house in houses {
            grid.add_house(house.into()).unwrap();
        }
        grid
    }

    #[test]
    fn evaluate_moves_scores_each_single_step_move() {
        let grid = grid_with_houses(1, 5, 1, &[(0, 0), (0, 4)]);
        let placement = Placement::from_iter([Cell::new(0, 1)]);

        let candidates = evaluate_moves(&grid, &placement).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].step,
            Move {
                from: Cell::new(0, 1),
                to: Cell::new(0, 2)
            }
        );
        assert_eq!(candidates[0].placement, Placement::from_iter([Cell::new(0, 2)]));
        assert_eq!(candidates[0].cost, 4);
    }

    #[test]
    fn trial_placements_keep_hospital_count_and_avoid_occupied_cells() {
        let grid = grid_with_houses(4, 4, 3, &[(1, 1), (2, 2)]);
        let placement = Placement::from_iter([Cell::new(0, 0), Cell::new(0, 1), Cell::new(3, 3)]);

        let candidates = evaluate_moves(&grid, &placement).unwrap();

        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert_eq!(candidate.placement.len(), 3);
            assert!(grid.contains(&candidate.step.to));
            assert!(!grid.is_house(&candidate.step.to));
            assert!(!placement.contains(&candidate.step.to));
            assert_eq!(candidate.cost, scoring::cost(&grid, &candidate.placement).unwrap());
        }
    }

    #[test]
    fn boxed_in_hospitals_have_no_moves() {
        let grid = grid_with_houses(1, 3, 1, &[(0, 0), (0, 2)]);
        let placement = Placement::from_iter([Cell::new(0, 1)]);
        assert!(evaluate_moves(&grid, &placement).unwrap().is_empty());
    }

    #[test]
    fn best_moves_collects_all_ties() {
        let grid = grid_with_houses(3, 3, 1, &[(1, 1)]);
        let placement = Placement::from_iter([Cell::new(0, 0)]);

        let best = best_moves(evaluate_moves(&grid, &placement).unwrap());

        assert_eq!(best.len(), 2);
        assert!(best.iter().all(|c| c.cost == 1));
        let targets: Vec<_> = best.iter().map(|c| c.step.to).collect();
        assert!(targets.contains(&Cell::new(1, 0)));
        assert!(targets.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn best_moves_of_nothing_is_empty() {
        assert!(best_moves(Vec::new()).is_empty());
    }
}
