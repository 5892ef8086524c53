// Watermark Module
// Resolves ffmpeg, builds the overlay command and runs it as a pass-through.

pub mod ffmpeg_builder;
pub mod filter;

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::constants::{DEFAULT_FONT_PATH, FFMPEG_TOOL};
use crate::error::{Result, WatermarkError};
use crate::tools::require_tool;

pub use filter::WatermarkStyle;

/// A single watermark invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Font file; the platform default is used when absent
    pub font: Option<PathBuf>,
}

impl WatermarkJob {
    pub fn font_path(&self) -> PathBuf {
        self.font
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH))
    }
}

/// Apply the fixed watermark to `job.input`, writing `job.output`.
///
/// ffmpeg inherits stdio so its own diagnostics reach the user. Its exit
/// status is returned as-is; a failed run is not an error here and any
/// partial output is left in place.
pub fn apply_watermark(job: &WatermarkJob) -> Result<ExitStatus> {
    // Checked before anything touches the filesystem
    let ffmpeg = require_tool(FFMPEG_TOOL)?;

    let args = ffmpeg_builder::build_watermark_args(job, &WatermarkStyle::default())?;
    log::info!(
        "Watermarking {} -> {}",
        job.input.display(),
        job.output.display()
    );
    log::debug!("{} {:?}", ffmpeg.display(), args);

    let status = Command::new(&ffmpeg).args(&args).status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WatermarkError::DependencyMissing(FFMPEG_TOOL.to_string())
        } else {
            WatermarkError::Io(e)
        }
    })?;

    if !status.success() {
        log::info!("ffmpeg exited with {}", status);
    }

    Ok(status)
}

/// Map a child exit status to this process's exit code.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    crate::constants::EXIT_FAILURE
}
