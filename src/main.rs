mod cli;
mod config_loader;
mod app_config;
mod camera_config;
mod camera;
mod core;
mod errors;
mod operations;
mod common;

use common::logging_setup;
use config_loader::DEFAULT_CONFIG_PATH;
use log::{debug, info};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();
    logging_setup::initialize_logging(&matches);

    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if matches.get_flag("create-config") {
        return operations::config_op::handle_create_config(&config_path);
    }

    debug!("Attempting to load configuration from: {}", config_path.display());
    let master_config = match operations::config_op::load_or_bootstrap(&config_path)? {
        Some(cfg) => cfg,
        None => return Ok(()),
    };

    operations::screenshot_op::handle_screenshot_cli(&master_config, &matches).await?;

    info!("🏁 Finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
