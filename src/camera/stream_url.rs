use crate::camera_config::StreamName;
use std::fmt;

pub const RTSP_PROTOCOL: &str = "rtsp";
pub const PASSWORD_MASK: &str = "***";

/// Connection string for a camera stream:
/// `<protocol>://<username>:<password>@<host>:<port>/<path>`.
///
/// `Display` and `Debug` both print the masked form, so a `StreamUrl` can be
/// logged directly. Only [`StreamUrl::as_str`] exposes the password.
#[derive(Clone, PartialEq, Eq)]
pub struct StreamUrl {
    url: String,
    masked: String,
}

impl StreamUrl {
    pub fn new(protocol: &str, username: &str, password: &str, host: &str, port: u16, path: &str) -> Self {
        let build = |secret: &str| format!("{}://{}:{}@{}:{}/{}", protocol, username, secret, host, port, path);
        StreamUrl {
            url: build(password),
            masked: build(PASSWORD_MASK),
        }
    }

    pub fn rtsp(username: &str, password: &str, host: &str, port: u16, stream: StreamName) -> Self {
        Self::new(RTSP_PROTOCOL, username, password, host, port, stream.as_str())
    }

    /// The full URL including the password, for handing to the decoder.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn masked(&self) -> &str {
        &self.masked
    }
}

impl fmt::Display for StreamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.masked())
    }
}

impl fmt::Debug for StreamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StreamUrl").field(&self.masked()).finish()
    }
}
