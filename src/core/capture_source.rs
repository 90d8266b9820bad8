use crate::camera::stream_url::StreamUrl;
use crate::errors::AppError;
use image::RgbImage;
use std::time::Duration;

/// A decoded frame, RGB8, owned by the capture sequence until it is encoded.
pub type CapturedFrame = RgbImage;

// --- The StreamBackend / FrameSession traits ---

/// Something that can open a video stream for decoding.
pub trait StreamBackend {
    type Session: FrameSession;

    /// Opens a decoder session. `timeout` bounds both the open and every read.
    /// Implementations return `AppError::StreamOpen` when the session does not
    /// report itself open.
    fn open(&self, url: &StreamUrl, timeout: Duration) -> Result<Self::Session, AppError>;
}

/// An open decoder session. Dropping the session releases it.
pub trait FrameSession {
    /// Performs one blocking read.
    fn read_frame(&mut self) -> Result<CapturedFrame, AppError>;
}
