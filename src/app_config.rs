use crate::config_loader::SETTINGS_SECTION;
use crate::errors::AppError;
use std::path::PathBuf;
use std::str::FromStr;

/// One option as written in the config file. Lookup and parsing are deferred
/// until the value is needed, so an option replaced by a CLI override may be
/// absent or malformed in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOption {
    section: &'static str,
    key: &'static str,
    value: Option<String>,
}

impl RawOption {
    pub fn new(section: &'static str, key: &'static str, value: Option<&str>) -> Self {
        RawOption {
            section,
            key,
            value: value.map(|v| v.trim().to_string()),
        }
    }

    pub fn with_value(section: &'static str, key: &'static str, value: impl ToString) -> Self {
        RawOption {
            section,
            key,
            value: Some(value.to_string()),
        }
    }

    /// The text from the file, if the option is present.
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn get(&self) -> Result<&str, AppError> {
        self.raw().ok_or_else(|| {
            AppError::Config(format!("No option '{}' in section: '{}'", self.key, self.section))
        })
    }

    pub fn parse<T>(&self) -> Result<T, AppError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.get()?;
        raw.parse::<T>().map_err(|e| {
            AppError::Config(format!(
                "Invalid value '{}' for '{}' in section '{}': {}",
                raw, self.key, self.section, e
            ))
        })
    }
}

/// The `[settings]` section of the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSettings {
    pub timeout: RawOption,                  // seconds; overridable by --timeout
    pub default_output_dir: Option<PathBuf>, // None when the option is left empty
    pub image_quality: u8,                   // JPEG quality (0-100)
}

impl Default for CaptureSettings {
    fn default() -> Self {
        CaptureSettings {
            timeout: RawOption::with_value(SETTINGS_SECTION, "timeout", 10),
            default_output_dir: Some(PathBuf::from("./screenshots")),
            image_quality: 95,
        }
    }
}
