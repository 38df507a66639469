pub mod climb;
pub mod restart;

use crate::config::AppConfig;
use crate::render::ImageRenderer;
use crate::utils::display;
use hospitals::engine::state::ClimbResult;

fn print_result(config: &AppConfig, result: &ClimbResult) {
    println!("{}", display::grid_map(&config.grid, &result.placement));
    println!();
    println!("Hospitals:  {}", result.placement);
    println!("Cost:       {}", result.cost);
    println!(
        "Iterations: {} ({})",
        result.iterations, result.termination
    );
    println!("Seed:       {}", config.seed);
}

fn renderer_for(config: &AppConfig) -> Option<ImageRenderer> {
    config.frame_prefix.as_ref().map(|_| ImageRenderer::new())
}
