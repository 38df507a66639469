use hospitals::core::models::grid::Grid;
use hospitals::engine::config::SearchConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct AppConfig {
    pub grid: Grid,
    pub search: SearchConfig,
    /// Seed the houses were generated from; also recorded for reproducing a run.
    pub seed: u64,
    pub frame_prefix: Option<String>,
}

impl AppConfig {
    /// Generator for the search, seeded apart from house generation.
    pub fn search_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(1))
    }
}
