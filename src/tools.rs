// External tool resolver for ffmpeg/ffprobe
//
// Resolution order:
// 1) Environment variable override (WATERMARK_FFMPEG_PATH, etc.), taken verbatim
// 2) Sidecar next to the executable, or in its bin/ subdirectory
// 3) Bare tool name, looked up on PATH by the OS

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::{FFMPEG_PATH_ENV, FFMPEG_TOOL, FFPROBE_PATH_ENV, FFPROBE_TOOL};
use crate::error::{Result, WatermarkError};

/// Get the directory containing the current executable
fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Resolve a tool path from an explicit override and the executable's directory.
fn resolve_tool_from(
    override_path: Option<OsString>,
    exe_dir: Option<&Path>,
    default_name: &str,
) -> PathBuf {
    // An explicit override wins even if nothing exists there
    if let Some(v) = override_path.filter(|v| !v.is_empty()) {
        return PathBuf::from(v);
    }

    let mut filename = default_name.to_string();
    if cfg!(windows) && !filename.to_lowercase().ends_with(".exe") {
        filename.push_str(".exe");
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(&filename);
        if candidate.is_file() {
            return candidate;
        }

        let bin_candidate = dir.join("bin").join(&filename);
        if bin_candidate.is_file() {
            return bin_candidate;
        }
    }

    PathBuf::from(default_name)
}

fn resolve_tool(env_key: &str, default_name: &str) -> PathBuf {
    resolve_tool_from(env::var_os(env_key), exe_dir().as_deref(), default_name)
}

/// Get path to ffmpeg binary
pub fn ffmpeg_path() -> PathBuf {
    resolve_tool(FFMPEG_PATH_ENV, FFMPEG_TOOL)
}

/// Get path to ffprobe binary
pub fn ffprobe_path() -> PathBuf {
    resolve_tool(FFPROBE_PATH_ENV, FFPROBE_TOOL)
}

/// Check if a tool is runnable at the given path
pub fn is_tool_available(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }

    // A bare name only resolves through PATH, so try running it
    if path.components().count() == 1 {
        return Command::new(path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
    }

    false
}

/// Resolve a tool by name and fail with DependencyMissing if it cannot run.
pub fn require_tool(tool: &str) -> Result<PathBuf> {
    let path = match tool {
        FFMPEG_TOOL => ffmpeg_path(),
        FFPROBE_TOOL => ffprobe_path(),
        other => return Err(WatermarkError::DependencyMissing(other.to_string())),
    };

    if !is_tool_available(&path) {
        log::debug!("{} not available at {}", tool, path.display());
        return Err(WatermarkError::DependencyMissing(tool.to_string()));
    }

    log::debug!("Resolved {} to {}", tool, path.display());
    Ok(path)
}
