use crate::errors::AppError;
use log::debug;
use std::path::{Path, PathBuf};

pub const SCREENSHOT_EXTENSION: &str = "jpg";

pub fn generate_timestamped_filename(
    timestamp: &str, // already formatted, e.g. "20240307_090502"
    extension: &str, // e.g., "jpg"
) -> String {
    format!("{}.{}", timestamp, extension)
}

/// Picks where the screenshot goes: the explicit path untouched, else
/// `<default_dir>/<timestamp>.jpg`, else `<timestamp>.jpg` in the working directory.
pub fn resolve_output_path(explicit: Option<&Path>, default_dir: Option<&Path>, timestamp: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let filename = generate_timestamped_filename(timestamp, SCREENSHOT_EXTENSION);
    match default_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Creates the directory that will contain `file_path`, if it has one and it is missing.
pub fn ensure_parent_directory(file_path: &Path) -> Result<(), AppError> {
    let dir_path = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !dir_path.exists() {
        debug!("Output directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(dir_path).map_err(|e| {
            AppError::Io(format!(
                "Failed to create output directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(AppError::Io(format!(
            "Output path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(())
}
