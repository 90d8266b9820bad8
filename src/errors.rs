use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing required setting(s): {0}. Specify them in the config file or on the command line")]
    MissingCredential(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Could not open RTSP stream: {0}")]
    StreamOpen(String),

    #[error("Could not read frame from stream: {0}")]
    FrameRead(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Image Encoding Error: {0}")]
    Encode(String),

    #[error("OpenCV Error: {0}")]
    OpenCV(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<opencv::Error> for AppError {
    fn from(err: opencv::Error) -> Self {
        AppError::OpenCV(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Encode(err.to_string())
    }
}
