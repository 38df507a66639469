use super::{print_result, renderer_for};
use crate::cli::ClimbArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use hospitals::engine::context::SearchContext;
use hospitals::engine::progress::ProgressReporter;
use hospitals::workflows;
use tracing::info;

pub fn run(args: ClimbArgs) -> Result<()> {
    let app_config = config::build_config(&args.grid, None)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let renderer = renderer_for(&app_config);

    let mut context = SearchContext::new(&app_config.grid, &app_config.search, &reporter)?;
    if let (Some(renderer), Some(prefix)) = (&renderer, &app_config.frame_prefix) {
        info!(prefix = %prefix, "Writing a frame per accepted move.");
        context = context.with_snapshots(renderer, prefix);
    }

    let mut rng = app_config.search_rng();
    let result = workflows::climb::run(&context, &mut rng)?;

    print_result(&app_config, &result);
    Ok(())
}
