use super::defaults::DefaultsConfig;
use super::models::AppConfig;
use crate::cli::GridArgs;
use crate::error::Result;
use hospitals::core::models::cell::Cell;
use hospitals::core::models::grid::Grid;
use hospitals::engine::config::SearchConfigBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Resolves command-line arguments against [`DefaultsConfig`] into a ready grid and
/// search configuration.
///
/// Explicit `--house` cells win over random generation. Random houses are drawn
/// uniformly over the whole grid; duplicate draws collapse, so the grid may end up
/// with fewer houses than requested.
pub fn build_config(args: &GridArgs, restarts: Option<usize>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let height = args.height.unwrap_or(defaults.height);
    let width = args.width.unwrap_or(defaults.width);
    let hospitals = args.hospitals.unwrap_or(defaults.hospitals);
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut grid = Grid::new(height, width, hospitals)?;

    if args.house.is_empty() {
        let requested = args.houses.unwrap_or(defaults.houses);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..requested {
            let cell = Cell::new(rng.gen_range(0..height), rng.gen_range(0..width));
            grid.add_house(cell)?;
        }
        debug!(
            requested,
            placed = grid.houses().len(),
            "Generated random houses."
        );
    } else {
        for &cell in &args.house {
            grid.add_house(cell)?;
        }
    }

    grid.validate()?;

    let search = SearchConfigBuilder::new()
        .max_iterations(args.max_iterations)
        .restarts(restarts.unwrap_or(defaults.restarts))
        .build()?;

    info!(
        height,
        width,
        hospitals,
        houses = grid.houses().len(),
        seed,
        "Configuration resolved."
    );

    Ok(AppConfig {
        grid,
        search,
        seed,
        frame_prefix: args.frames.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use hospitals::core::models::grid::GridError;
    use rand::RngCore;

    fn seeded_args() -> GridArgs {
        GridArgs {
            seed: Some(11),
            ..GridArgs::default()
        }
    }

    #[test]
    fn defaults_fill_missing_arguments() {
        let config = build_config(&seeded_args(), None).unwrap();

        assert_eq!(config.grid.height(), 10);
        assert_eq!(config.grid.width(), 20);
        assert_eq!(config.grid.hospital_count(), 3);
        assert!(!config.grid.houses().is_empty());
        assert!(config.grid.houses().len() <= 15);
        assert_eq!(config.search.restarts, 20);
        assert_eq!(config.search.max_iterations, None);
        assert_eq!(config.seed, 11);
    }

    #[test]
    fn same_seed_generates_same_houses() {
        let a = build_config(&seeded_args(), None).unwrap();
        let b = build_config(&seeded_args(), None).unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn explicit_houses_replace_random_generation() {
        let args = GridArgs {
            height: Some(1),
            width: Some(5),
            hospitals: Some(1),
            house: vec![Cell::new(0, 0), Cell::new(0, 4), Cell::new(0, 4)],
            ..seeded_args()
        };

        let config = build_config(&args, Some(2)).unwrap();

        assert_eq!(config.grid.houses().len(), 2);
        assert!(config.grid.is_house(&Cell::new(0, 4)));
        assert_eq!(config.search.restarts, 2);
    }

    #[test]
    fn out_of_bounds_house_is_rejected() {
        let args = GridArgs {
            height: Some(2),
            width: Some(2),
            house: vec![Cell::new(2, 0)],
            ..seeded_args()
        };

        let result = build_config(&args, None);

        assert!(matches!(
            result,
            Err(CliError::Grid(GridError::HouseOutOfBounds { .. }))
        ));
    }

    #[test]
    fn too_many_hospitals_is_rejected() {
        let args = GridArgs {
            height: Some(1),
            width: Some(3),
            hospitals: Some(2),
            house: vec![Cell::new(0, 0), Cell::new(0, 1)],
            ..seeded_args()
        };

        assert!(matches!(
            build_config(&args, None),
            Err(CliError::Grid(GridError::TooManyHospitals { .. }))
        ));
    }

    #[test]
    fn zero_restarts_is_rejected() {
        assert!(matches!(
            build_config(&seeded_args(), Some(0)),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn search_rng_is_reproducible() {
        let config = build_config(&seeded_args(), None).unwrap();
        let mut a = config.search_rng();
        let mut b = config.search_rng();
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
