// Watermark Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error("{0}")]
    Usage(String),

    #[error("Required tool not found: {0} (install it or set the path override)")]
    DependencyMissing(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("FFprobe error: {0}")]
    FFprobe(String),
}

impl From<clap::Error> for WatermarkError {
    fn from(err: clap::Error) -> Self {
        WatermarkError::Usage(err.render().to_string())
    }
}

pub type Result<T> = std::result::Result<T, WatermarkError>;
