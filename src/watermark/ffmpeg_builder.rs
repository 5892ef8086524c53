// FFmpeg argument builder for the watermark pass
// Video is re-encoded with the drawtext overlay, audio is stream-copied.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::filter::{drawtext_filter, WatermarkStyle};
use super::WatermarkJob;
use crate::error::Result;

/// Build the ffmpeg args list for `job`.
/// Paths are passed as separate arguments; nothing goes through a shell.
pub fn build_watermark_args(job: &WatermarkJob, style: &WatermarkStyle) -> Result<Vec<OsString>> {
    let vf = drawtext_filter(style, &job.font_path())?;

    let mut args: Vec<OsString> = Vec::with_capacity(9);
    args.push("-y".into()); // overwrite output
    args.push("-i".into());
    args.push(file_arg(&job.input));
    args.push("-vf".into());
    args.push(vf.into());
    args.extend(audio_copy_args());
    args.push(file_arg(&job.output));

    Ok(args)
}

/// A path as an ffmpeg file argument. ffmpeg reads a leading '-' as an
/// option, so such relative paths are anchored at "./".
fn file_arg(path: &Path) -> OsString {
    if path.as_os_str().to_string_lossy().starts_with('-') {
        PathBuf::from(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_os_string()
    }
}

/// Re-mux audio without re-encoding
fn audio_copy_args() -> [OsString; 2] {
    ["-c:a".into(), "copy".into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FONT_PATH;
    use std::path::PathBuf;

    fn job(font: Option<&str>) -> WatermarkJob {
        WatermarkJob {
            input: PathBuf::from("in put.mp4"),
            output: PathBuf::from("out'; rm -rf ~.mp4"),
            font: font.map(PathBuf::from),
        }
    }

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_argument_layout() {
        let args = strings(&build_watermark_args(&job(None), &WatermarkStyle::default()).unwrap());
        assert_eq!(args.len(), 8);
        assert_eq!(&args[..3], ["-y", "-i", "in put.mp4"]);
        assert_eq!(args[3], "-vf");
        assert!(args[4].starts_with("drawtext="));
        assert_eq!(&args[5..], ["-c:a", "copy", "out'; rm -rf ~.mp4"]);
    }

    #[test]
    fn test_default_font_used_when_omitted() {
        let args = strings(&build_watermark_args(&job(None), &WatermarkStyle::default()).unwrap());
        let expected = drawtext_filter(
            &WatermarkStyle::default(),
            std::path::Path::new(DEFAULT_FONT_PATH),
        )
        .unwrap();
        assert_eq!(args[4], expected);
    }

    #[test]
    fn test_font_override_verbatim() {
        let args = strings(
            &build_watermark_args(&job(Some("/opt/fonts/Mono.otf")), &WatermarkStyle::default())
                .unwrap(),
        );
        assert!(args[4].contains("fontfile=/opt/fonts/Mono.otf:"));
        assert!(!args[4].contains(DEFAULT_FONT_PATH));
    }

    #[test]
    fn test_dash_paths_not_read_as_options() {
        let job = WatermarkJob {
            input: PathBuf::from("-i"),
            output: PathBuf::from("-report"),
            font: None,
        };
        let args = strings(&build_watermark_args(&job, &WatermarkStyle::default()).unwrap());
        let anchored = |name: &str| PathBuf::from(".").join(name).to_string_lossy().into_owned();
        assert_eq!(args[2], anchored("-i"));
        let last = args.last().unwrap();
        assert!(!last.starts_with('-'), "last arg {:?}", last);
        assert_eq!(*last, anchored("-report"));
    }

    #[test]
    fn test_plain_paths_unchanged() {
        assert_eq!(file_arg(Path::new("clip-1.mp4")), OsString::from("clip-1.mp4"));
        assert_eq!(file_arg(Path::new("/tmp/-x.mp4")), OsString::from("/tmp/-x.mp4"));
    }
}
