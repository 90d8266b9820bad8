use crate::app_config::RawOption;
use crate::config_loader::CAMERA_SECTION;
use std::fmt;
use std::str::FromStr;

/// Stream profiles exposed by Tapo cameras: `stream1` is the main (HD) stream,
/// `stream2` the low-resolution sub stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamName {
    #[default]
    Stream1,
    Stream2,
}

impl StreamName {
    pub const ALL: [&'static str; 2] = ["stream1", "stream2"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamName::Stream1 => "stream1",
            StreamName::Stream2 => "stream2",
        }
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stream1" => Ok(StreamName::Stream1),
            "stream2" => Ok(StreamName::Stream2),
            other => Err(format!(
                "unknown stream '{}' (expected one of: {})",
                other,
                StreamName::ALL.join(", ")
            )),
        }
    }
}

/// The `[camera]` section of the config file. Every option here can be
/// replaced on the command line, so each is kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub ip: RawOption,
    pub username: RawOption,
    pub password: RawOption,
    pub port: RawOption,
    pub stream: RawOption,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            ip: RawOption::with_value(CAMERA_SECTION, "ip", "192.168.1.100"),
            username: RawOption::with_value(CAMERA_SECTION, "username", "admin"),
            password: RawOption::with_value(CAMERA_SECTION, "password", "your_password_here"), // placeholder, user must edit
            port: RawOption::with_value(CAMERA_SECTION, "port", 554),
            stream: RawOption::with_value(CAMERA_SECTION, "stream", StreamName::Stream1),
        }
    }
}
