use crate::camera::stream_url::StreamUrl;
use crate::camera_config::StreamName;
use crate::config_loader::MasterConfig;
use crate::errors::AppError;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

/// Values supplied on the command line. `None` means "use the config value";
/// `Some(0)` for a numeric field is a real value and is validated as such.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub ip: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub stream: Option<StreamName>,
    pub timeout_secs: Option<u64>,
}

/// Settings for one run: config values with the CLI overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSettings {
    pub ip: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    pub stream: StreamName,
    pub timeout_secs: u64,
    pub image_quality: u8,
    pub default_output_dir: Option<PathBuf>,
}

impl EffectiveSettings {
    pub fn resolve(config: &MasterConfig, overrides: &CliOverrides) -> Result<Self, AppError> {
        let camera = &config.camera;
        let settings = EffectiveSettings {
            ip: override_or(overrides.ip.clone(), || camera.ip.get().map(str::to_string))?,
            username: override_or(overrides.username.clone(), || camera.username.get().map(str::to_string))?,
            password: override_or(overrides.password.clone(), || camera.password.get().map(str::to_string))?,
            port: override_or(overrides.port, || camera.port.parse())?,
            stream: override_or(overrides.stream, || camera.stream.parse())?,
            timeout_secs: override_or(overrides.timeout_secs, || config.settings.timeout.parse())?,
            image_quality: config.settings.image_quality,
            default_output_dir: config.settings.default_output_dir.clone(),
        };
        settings.validate()?;
        debug!(
            "Resolved settings: ip={}, username={}, port={}, stream={}, timeout={}s, quality={}",
            settings.ip, settings.username, settings.port, settings.stream, settings.timeout_secs, settings.image_quality
        );
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        let missing: Vec<&str> = [
            ("ip", &self.ip),
            ("username", &self.username),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingCredential(missing.join(", ")));
        }

        if self.port == 0 {
            return Err(AppError::InvalidSetting("port must be a positive integer".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidSetting("timeout must be at least 1 second".to_string()));
        }
        // The decoder takes its timeouts as i32 milliseconds.
        if self.timeout_millis().is_none() {
            return Err(AppError::InvalidSetting(format!(
                "timeout of {} seconds is too large",
                self.timeout_secs
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn timeout_millis(&self) -> Option<i32> {
        self.timeout_secs
            .checked_mul(1000)
            .and_then(|ms| i32::try_from(ms).ok())
    }

    pub fn stream_url(&self) -> StreamUrl {
        StreamUrl::rtsp(&self.username, &self.password, &self.ip, self.port, self.stream)
    }
}

/// The override when given; otherwise the config value, which is only looked
/// up (and parsed) here.
fn override_or<T>(value: Option<T>, from_config: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
    match value {
        Some(v) => Ok(v),
        None => from_config(),
    }
}
