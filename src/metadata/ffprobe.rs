// FFprobe wrapper for container and stream inspection

use std::path::Path;
use std::process::Command;
use serde::Deserialize;

use crate::constants::FFPROBE_TOOL;
use crate::error::{Result, WatermarkError};
use crate::metadata::MediaMetadata;
use crate::tools::require_tool;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    channels: Option<i32>,
    sample_rate: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Run ffprobe on a file and extract metadata
pub fn probe(path: &Path) -> Result<MediaMetadata> {
    let ffprobe = require_tool(FFPROBE_TOOL)?;

    let output = Command::new(ffprobe)
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| WatermarkError::FFprobe(format!("Failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WatermarkError::FFprobe(format!(
            "ffprobe failed on {}: {}",
            path.display(),
            stderr
        )));
    }

    parse_probe_output(&output.stdout)
}

fn parse_probe_output(stdout: &[u8]) -> Result<MediaMetadata> {
    let probe_output: FFprobeOutput = serde_json::from_slice(stdout)
        .map_err(|e| WatermarkError::FFprobe(format!("Failed to parse ffprobe output: {}", e)))?;

    let mut meta = MediaMetadata::default();

    if let Some(ref format) = probe_output.format {
        meta.duration_ms = parse_duration_ms(format.duration.as_deref());
    }

    for stream in probe_output.streams.iter().flatten() {
        match stream.codec_type.as_deref() {
            // First stream of each kind wins
            Some("video") if meta.codec.is_none() => {
                meta.codec = stream.codec_name.clone();
                meta.width = stream.width;
                meta.height = stream.height;
                if meta.duration_ms.is_none() {
                    meta.duration_ms = parse_duration_ms(stream.duration.as_deref());
                }
            }
            Some("audio") if meta.audio_codec.is_none() => {
                meta.audio_codec = stream.codec_name.clone();
                meta.audio_channels = stream.channels;
                meta.audio_sample_rate = stream.sample_rate.as_ref().and_then(|s| s.parse().ok());
            }
            _ => {}
        }
    }

    Ok(meta)
}

/// Parse duration string to milliseconds
fn parse_duration_ms(duration_str: Option<&str>) -> Option<i64> {
    let seconds: f64 = duration_str?.parse().ok()?;
    Some((seconds * 1000.0).round() as i64)
}
