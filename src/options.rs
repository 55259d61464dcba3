use std::path::PathBuf;

use crate::color::RGBColorFormat;
use crate::identifier::{DEFAULT_PREFIX, DEFAULT_SUFFIX};
use crate::image::writer::header::HeaderDialect;
use crate::Arguments;

/// Canvas size before the quarter turn, the panel is mounted rotated.
pub const CANVAS_WIDTH: u32 = 240;
pub const CANVAS_HEIGHT: u32 = 135;
pub const LETTERBOX_COLOR: RGBColorFormat<u8> = RGBColorFormat::BLACK;
pub const TRANSPARENCY_COLOR: RGBColorFormat<u8> = RGBColorFormat::WHITE;
pub const VALUES_PER_LINE: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOptions {
    pub output_directory: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// fills the canvas where the scaled image does not reach
    pub letterbox_color: RGBColorFormat<u8>,
    /// transparent source pixels are blended onto this
    pub transparency_color: RGBColorFormat<u8>,
    pub values_per_line: usize,
    pub dialect: HeaderDialect,
    pub identifier_prefix: String,
    pub identifier_suffix: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            letterbox_color: LETTERBOX_COLOR,
            transparency_color: TRANSPARENCY_COLOR,
            values_per_line: VALUES_PER_LINE,
            dialect: HeaderDialect::Arduino,
            identifier_prefix: DEFAULT_PREFIX.to_owned(),
            identifier_suffix: DEFAULT_SUFFIX.to_owned(),
        }
    }
}

impl From<&Arguments> for ConversionOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            output_directory: value.output_directory.clone(),
            canvas_width: value.canvas_width,
            canvas_height: value.canvas_height,
            letterbox_color: value.letterbox_color,
            transparency_color: value.transparency_color,
            values_per_line: value.values_per_line,
            dialect: value.dialect,
            ..Self::default()
        }
    }
}
