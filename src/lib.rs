// Watermark - Library Entry Point
// Burns a fixed text watermark into a video by running ffmpeg.

pub mod constants;
pub mod error;
pub mod tools;
pub mod metadata;
pub mod watermark;

pub use error::{Result, WatermarkError};
pub use watermark::{apply_watermark, exit_code, WatermarkJob, WatermarkStyle};
