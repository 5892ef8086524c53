// Watermark Constants
// The overlay is fixed. None of these are exposed on the command line.

// Overlay text and styling
pub const WATERMARK_TEXT: &str = "PREVIEW";
pub const WATERMARK_FONT_SIZE: u32 = 24;
pub const WATERMARK_FONT_COLOR: &str = "white";
pub const WATERMARK_BOX_COLOR: &str = "black@0.5"; // semi-transparent
pub const WATERMARK_BOX_BORDER: u32 = 5;
pub const WATERMARK_MARGIN: u32 = 10; // pixels from right and bottom edges

// Default bold sans-serif font per platform
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Supplemental/Arial Bold.ttf";
#[cfg(windows)]
pub const DEFAULT_FONT_PATH: &str = "C:/Windows/Fonts/arialbd.ttf";
#[cfg(not(any(target_os = "macos", windows)))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

// External tools
pub const FFMPEG_TOOL: &str = "ffmpeg";
pub const FFPROBE_TOOL: &str = "ffprobe";
pub const FFMPEG_PATH_ENV: &str = "WATERMARK_FFMPEG_PATH";
pub const FFPROBE_PATH_ENV: &str = "WATERMARK_FFPROBE_PATH";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Process exit code for usage and dependency errors
pub const EXIT_FAILURE: i32 = 1;
