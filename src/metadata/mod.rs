// Media inspection
// Used to confirm that a watermarked output kept the source's duration and audio.

pub mod ffprobe;

use std::path::Path;
use std::process::Command;

use crate::constants::FFMPEG_TOOL;
use crate::error::{Result, WatermarkError};
use crate::tools::require_tool;

/// Container and stream properties reported by ffprobe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaMetadata {
    pub duration_ms: Option<i64>,

    // Video properties
    pub codec: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,

    // Audio properties
    pub audio_codec: Option<String>,
    pub audio_channels: Option<i32>,
    pub audio_sample_rate: Option<i32>,
}

impl MediaMetadata {
    pub fn has_video(&self) -> bool {
        self.codec.is_some()
    }

    pub fn has_audio(&self) -> bool {
        self.audio_codec.is_some()
    }
}

/// MD5 over the demuxed audio packets of `path`.
/// Two files with equal digests carry bit-identical audio.
pub fn audio_digest(path: &Path) -> Result<String> {
    let ffmpeg = require_tool(FFMPEG_TOOL)?;

    let output = Command::new(ffmpeg)
        .args(["-v", "error", "-nostdin", "-i"])
        .arg(path)
        .args(["-map", "0:a", "-c", "copy", "-f", "md5", "-"])
        .output()
        .map_err(|e| WatermarkError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WatermarkError::FFmpeg(format!("audio digest failed: {}", stderr)));
    }

    parse_md5_line(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
        WatermarkError::FFmpeg("md5 muxer produced no digest".to_string())
    })
}

/// Extract the hash from an md5 muxer line like "MD5=d41d8cd9..."
fn parse_md5_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("MD5="))
        .filter(|hash| !hash.is_empty())
        .map(|hash| hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_md5_line() {
        assert_eq!(
            parse_md5_line("MD5=0123456789abcdef0123456789abcdef\n"),
            Some("0123456789abcdef0123456789abcdef".to_string())
        );
    }

    #[test]
    fn test_parse_md5_line_missing() {
        assert_eq!(parse_md5_line(""), None);
        assert_eq!(parse_md5_line("MD5=\n"), None);
        assert_eq!(parse_md5_line("something else\n"), None);
    }

    #[test]
    fn test_stream_presence() {
        let meta = MediaMetadata {
            audio_codec: Some("aac".to_string()),
            ..Default::default()
        };
        assert!(meta.has_audio());
        assert!(!meta.has_video());
    }
}
