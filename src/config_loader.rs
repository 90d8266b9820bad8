use crate::app_config::{CaptureSettings, RawOption};
use crate::camera_config::CameraConfig;
use crate::errors::AppError;
use ini::{Ini, ParseOption};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const CAMERA_SECTION: &str = "camera";
pub const SETTINGS_SECTION: &str = "settings";
pub const DEFAULT_CONFIG_PATH: &str = "tapo_config.ini";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasterConfig {
    pub camera: CameraConfig,
    pub settings: CaptureSettings,
}

/// Result of looking for the config file at startup.
#[derive(Debug)]
pub enum ConfigLoad {
    Loaded(MasterConfig),
    /// No file existed; a default one was written to this path.
    CreatedDefault(PathBuf),
}

pub fn load_or_create_config(path: &Path) -> Result<ConfigLoad, AppError> {
    if !path.exists() {
        info!("📄 Configuration file not found: {}", path.display());
        write_default_config(path)?;
        return Ok(ConfigLoad::CreatedDefault(path.to_path_buf()));
    }
    load_config(path).map(ConfigLoad::Loaded)
}

pub fn load_config(path: &Path) -> Result<MasterConfig, AppError> {
    debug!("📄 Attempting to load config from: {}", path.display());
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("Failed to read configuration file '{}': {}", path.display(), e))
    })?;
    let config = parse_config(&config_str)?;

    debug!("✅ Loaded configuration from '{}' in {:?}", path.display(), start_time.elapsed());
    Ok(config)
}

/// Parses the INI text of a config file. Values are taken verbatim: quotes and
/// backslashes in passwords are not interpreted.
pub fn parse_config(config_str: &str) -> Result<MasterConfig, AppError> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(config_str, opt)
        .map_err(|e| AppError::Config(format!("Failed to parse INI configuration: {}", e)))?;

    let (camera_section, settings_section) = match (
        ini.section(Some(CAMERA_SECTION)),
        ini.section(Some(SETTINGS_SECTION)),
    ) {
        (Some(c), Some(s)) => (c, s),
        _ => {
            return Err(AppError::Config(format!(
                "Invalid configuration file format: sections [{}] and [{}] are required",
                CAMERA_SECTION, SETTINGS_SECTION
            )))
        }
    };

    let camera_opt = |key: &'static str| RawOption::new(CAMERA_SECTION, key, camera_section.get(key));
    let settings_opt = |key: &'static str| RawOption::new(SETTINGS_SECTION, key, settings_section.get(key));

    // Everything an override can replace is checked when the settings are resolved.
    let camera = CameraConfig {
        ip: camera_opt("ip"),
        username: camera_opt("username"),
        password: camera_opt("password"),
        port: camera_opt("port"),
        stream: camera_opt("stream"),
    };

    let image_quality: u8 = settings_opt("image_quality").parse()?;
    if image_quality > 100 {
        return Err(AppError::Config(format!(
            "image_quality must be between 0 and 100, got {}",
            image_quality
        )));
    }
    let output_dir_opt = settings_opt("default_output_dir");
    let default_output_dir = output_dir_opt.get()?;
    let settings = CaptureSettings {
        timeout: settings_opt("timeout"),
        default_output_dir: (!default_output_dir.is_empty()).then(|| PathBuf::from(default_output_dir)),
        image_quality,
    };

    Ok(MasterConfig { camera, settings })
}

/// Renders a config as an INI document.
pub fn to_ini(config: &MasterConfig) -> Ini {
    let mut ini = Ini::new();
    let camera = &config.camera;
    ini.with_section(Some(CAMERA_SECTION))
        .set("ip", camera.ip.raw().unwrap_or_default())
        .set("username", camera.username.raw().unwrap_or_default())
        .set("password", camera.password.raw().unwrap_or_default())
        .set("port", camera.port.raw().unwrap_or_default())
        .set("stream", camera.stream.raw().unwrap_or_default());
    let output_dir = config
        .settings
        .default_output_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    ini.with_section(Some(SETTINGS_SECTION))
        .set("timeout", config.settings.timeout.raw().unwrap_or_default())
        .set("default_output_dir", output_dir)
        .set("image_quality", config.settings.image_quality.to_string());
    ini
}

/// Writes the default configuration to `path`, replacing any existing file.
pub fn write_default_config(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating config directory '{}'", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Failed to create config directory '{}': {}", parent.display(), e))
            })?;
        }
    }

    to_ini(&MasterConfig::default())
        .write_to_file(path)
        .map_err(|e| AppError::Io(format!("Failed to write configuration file '{}': {}", path.display(), e)))?;

    info!("📝 Default configuration file created: {}", path.display());
    info!("Please edit the file to set your camera credentials and settings.");
    Ok(())
}
