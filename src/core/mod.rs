pub mod capture_source;
pub mod effective_settings;
