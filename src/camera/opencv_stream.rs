use crate::camera::stream_url::StreamUrl;
use crate::core::capture_source::{CapturedFrame, FrameSession, StreamBackend};
use crate::errors::AppError;
use log::{debug, info, warn};
use opencv::{core as opencv_core, imgproc, prelude::*, videoio};
use std::time::{Duration, Instant};

/// Opens RTSP streams through OpenCV's `videoio` (FFmpeg backend by default).
#[derive(Debug, Clone, Copy)]
pub struct OpenCvBackend {
    api_preference: i32,
}

impl Default for OpenCvBackend {
    fn default() -> Self {
        OpenCvBackend { api_preference: videoio::CAP_ANY }
    }
}

/// An open `VideoCapture`. Released when dropped, whichever way the capture
/// sequence exits.
pub struct OpenCvSession {
    capture: videoio::VideoCapture,
    label: String,
}

impl StreamBackend for OpenCvBackend {
    type Session = OpenCvSession;

    fn open(&self, url: &StreamUrl, timeout: Duration) -> Result<OpenCvSession, AppError> {
        let timeout_ms = i32::try_from(timeout.as_millis())
            .map_err(|_| AppError::InvalidSetting(format!("timeout {:?} does not fit the decoder", timeout)))?;

        debug!("Creating VideoCapture for {} with {} ms open/read timeouts", url, timeout_ms);
        let open_start = Instant::now();
        let params = opencv_core::Vector::<i32>::from_slice(&[
            videoio::CAP_PROP_OPEN_TIMEOUT_MSEC,
            timeout_ms,
            videoio::CAP_PROP_READ_TIMEOUT_MSEC,
            timeout_ms,
        ]);
        let capture = videoio::VideoCapture::from_file_with_params(url.as_str(), self.api_preference, &params)?;
        let session = OpenCvSession { capture, label: url.to_string() };
        debug!("  VideoCapture created in {:?}", open_start.elapsed());

        if !session.capture.is_opened()? {
            // session drops here and releases the capture
            return Err(AppError::StreamOpen(format!("{} - check camera availability and credentials", url)));
        }
        info!("👍 RTSP stream opened: {}", url);
        Ok(session)
    }
}

impl FrameSession for OpenCvSession {
    fn read_frame(&mut self) -> Result<CapturedFrame, AppError> {
        let read_start = Instant::now();
        let mut frame = opencv_core::Mat::default();
        if !self.capture.read(&mut frame)? {
            return Err(AppError::FrameRead(format!("no frame returned by {}", self.label)));
        }
        if frame.empty() {
            return Err(AppError::FrameRead(format!("empty frame returned by {}", self.label)));
        }
        debug!(
            "OpenCV: frame {}x{} ({} channels) read in {:?}",
            frame.cols(),
            frame.rows(),
            frame.channels(),
            read_start.elapsed()
        );
        mat_to_rgb(&frame)
    }
}

impl Drop for OpenCvSession {
    fn drop(&mut self) {
        match self.capture.release() {
            Ok(()) => debug!("Released VideoCapture for {}", self.label),
            Err(e) => warn!("⚠️ Failed to release VideoCapture for {}: {}", self.label, e),
        }
    }
}

/// Converts an 8-bit BGR, BGRA or grayscale `Mat` into an owned RGB image.
pub fn mat_to_rgb(frame: &opencv_core::Mat) -> Result<CapturedFrame, AppError> {
    if frame.depth() != opencv_core::CV_8U {
        return Err(AppError::FrameRead(format!("unsupported frame depth {}", frame.depth())));
    }
    let code = match frame.channels() {
        1 => imgproc::COLOR_GRAY2RGB,
        3 => imgproc::COLOR_BGR2RGB,
        4 => imgproc::COLOR_BGRA2RGB,
        n => return Err(AppError::FrameRead(format!("unsupported frame with {} channels", n))),
    };

    let mut rgb = opencv_core::Mat::default();
    imgproc::cvt_color_def(frame, &mut rgb, code)?;

    let width = u32::try_from(rgb.cols()).map_err(|_| AppError::FrameRead("negative frame width".to_string()))?;
    let height = u32::try_from(rgb.rows()).map_err(|_| AppError::FrameRead("negative frame height".to_string()))?;
    let bytes = rgb.data_bytes()?.to_vec();

    CapturedFrame::from_raw(width, height, bytes)
        .ok_or_else(|| AppError::FrameRead(format!("frame buffer does not match {}x{} RGB", width, height)))
}
