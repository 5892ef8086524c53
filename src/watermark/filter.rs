// Watermark drawtext filter
//
// Text is drawn bottom-right on a semi-transparent box. Values embedded in the
// filter go through both ffmpeg parsing levels: the filter's own option string,
// then the filter graph around it.

use std::path::Path;

use crate::constants::{
    WATERMARK_BOX_BORDER, WATERMARK_BOX_COLOR, WATERMARK_FONT_COLOR, WATERMARK_FONT_SIZE,
    WATERMARK_MARGIN, WATERMARK_TEXT,
};
use crate::error::{Result, WatermarkError};

/// Fixed overlay parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkStyle {
    pub text: String,
    pub font_size: u32,
    pub font_color: String,
    pub box_color: String,
    pub box_border: u32,
    pub margin: u32,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            text: WATERMARK_TEXT.to_string(),
            font_size: WATERMARK_FONT_SIZE,
            font_color: WATERMARK_FONT_COLOR.to_string(),
            box_color: WATERMARK_BOX_COLOR.to_string(),
            box_border: WATERMARK_BOX_BORDER,
            margin: WATERMARK_MARGIN,
        }
    }
}

/// Build the drawtext filter for `style` using the font at `font`.
pub fn drawtext_filter(style: &WatermarkStyle, font: &Path) -> Result<String> {
    let font = font.to_str().ok_or_else(|| {
        WatermarkError::InvalidPath(format!(
            "font path is not valid UTF-8: {}",
            font.display()
        ))
    })?;

    // drawtext expands %{...} sequences in text
    let text = escape_chars(&style.text, &['\\', '%']);

    let options = [
        format!("fontfile={}", escape_option_value(font)),
        format!("text={}", escape_option_value(&text)),
        format!("fontcolor={}", style.font_color),
        format!("fontsize={}", style.font_size),
        "box=1".to_string(),
        format!("boxcolor={}", style.box_color),
        format!("boxborderw={}", style.box_border),
        format!("x=w-tw-{}", style.margin),
        format!("y=h-th-{}", style.margin),
    ];

    Ok(escape_graph(&format!("drawtext={}", options.join(":"))))
}

/// First level: escape a value inside a filter's key=value option list.
fn escape_option_value(value: &str) -> String {
    escape_chars(value, &['\\', '\'', ':'])
}

/// Second level: escape a filter description for the filter graph parser.
fn escape_graph(filter: &str) -> String {
    escape_chars(filter, &['\\', '\'', '[', ']', ',', ';'])
}

fn escape_chars(value: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
