use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("Cannot draw {requested} distinct cells from {available} free cells")]
    NotEnoughCandidates { requested: usize, available: usize },
    #[error("Candidate list is empty, cannot choose an element")]
    EmptyCandidates,
}

/// Draws `grid.hospital_count()` distinct cells uniformly at random, without
/// replacement, from the cells not occupied by houses.
#[instrument(level = "trace", skip_all, fields(hospitals = grid.hospital_count()))]
pub fn random_placement(grid: &Grid, rng: &mut impl Rng) -> Result<Placement, SamplingError> {
    let free = grid.free_cells();
    let requested = grid.hospital_count();
    if free.len() < requested {
        return Err(SamplingError::NotEnoughCandidates {
            requested,
            available: free.len(),
        });
    }

    let chosen = free.into_iter().choose_multiple(rng, requested);
    Ok(Placement::from_iter(chosen))
}

/// Picks one element of `candidates` uniformly at random.
pub fn choose_uniform<'a, T>(candidates: &'a [T], rng: &mut impl Rng) -> Result<&'a T, SamplingError> {
    candidates.choose(rng).ok_or(SamplingError::EmptyCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn random_placement_has_exact_size_and_avoids_houses() {
        let mut grid = Grid::new(4, 4, 3).unwrap();
        for col in 0..4 {
            grid.add_house(Cell::new(1, col)).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let placement = random_placement(&grid, &mut rng).unwrap();
            assert_eq!(placement.len(), 3);
            assert!(placement.iter().all(|cell| !grid.is_house(cell)));
            assert!(placement.iter().all(|cell| grid.contains(cell)));
        }
    }

    #[test]
    fn random_placement_fills_grid_when_every_free_cell_is_needed() {
        let mut grid = Grid::new(1, 3, 2).unwrap();
        grid.add_house(Cell::new(0, 1)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let placement = random_placement(&grid, &mut rng).unwrap();

        assert_eq!(
            placement,
            Placement::from_iter([Cell::new(0, 0), Cell::new(0, 2)])
        );
    }

    #[test]
    fn random_placement_rejects_overfull_grid() {
        let mut grid = Grid::new(1, 2, 2).unwrap();
        grid.add_house(Cell::new(0, 0)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            random_placement(&grid, &mut rng),
            Err(SamplingError::NotEnoughCandidates {
                requested: 2,
                available: 1
            })
        );
    }

    #[test]
    fn random_placement_is_reproducible_for_a_seed() {
        let grid = Grid::new(10, 20, 3).unwrap();
        let a = random_placement(&grid, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = random_placement(&grid, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_placement_covers_many_starts() {
        let grid = Grid::new(5, 5, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let starts: HashSet<_> = (0..200)
            .map(|_| random_placement(&grid, &mut rng).unwrap())
            .collect();
        assert!(starts.len() > 10);
    }

    #[test]
    fn choose_uniform_returns_member_or_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = [10, 20, 30];
        for _ in 0..20 {
            assert!(items.contains(choose_uniform(&items, &mut rng).unwrap()));
        }
        let empty: [u8; 0] = [];
        assert_eq!(
            choose_uniform(&empty, &mut rng),
            Err(SamplingError::EmptyCandidates)
        );
    }

    #[test]
    fn choose_uniform_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = ['a', 'b', 'c', 'd'];
        let seen: HashSet<_> = (0..200)
            .map(|_| *choose_uniform(&items, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 4);
    }
}
