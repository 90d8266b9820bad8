use chrono::{DateTime, Local};

/// Second-precision timestamp used for screenshot filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Get current local timestamp as a formatted string
pub fn current_local_timestamp_str(format_str: &str) -> String {
    format_timestamp(&Local::now(), format_str)
}

pub fn format_timestamp(at: &DateTime<Local>, format_str: &str) -> String {
    at.format(format_str).to_string()
}
