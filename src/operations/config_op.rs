use crate::config_loader::{self, ConfigLoad, MasterConfig};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// `--create-config`: (re)writes the default file, even over an existing one.
pub fn handle_create_config(config_path: &Path) -> Result<()> {
    config_loader::write_default_config(config_path)
        .with_context(|| format!("Failed to create configuration file '{}'", config_path.display()))
}

/// Loads the config file. When it is missing a default one is written and
/// `None` is returned; the caller should exit without capturing.
pub fn load_or_bootstrap(config_path: &Path) -> Result<Option<MasterConfig>> {
    let loaded = config_loader::load_or_create_config(config_path).with_context(|| {
        format!(
            "Error reading configuration '{}'. Try running with --create-config to generate a default configuration file",
            config_path.display()
        )
    })?;
    match loaded {
        ConfigLoad::Loaded(cfg) => Ok(Some(cfg)),
        ConfigLoad::CreatedDefault(path) => {
            info!("🛑 No capture attempted. Edit '{}' and run again.", path.display());
            Ok(None)
        }
    }
}
