use std::fmt;

use image::GrayImage;

use crate::lut::Palette;

/// Rendered ASCII art, one newline-terminated line per image row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCanvas {
    text: String,
    width: u32,
    height: u32,
}

impl AsciiCanvas {
    /// Glyphs per row
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Serialized text, every row followed by `\n`
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Rows without their terminators
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// True when there are no glyphs to show
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Bucket index for an intensity in a ramp of `levels` glyphs
///
/// Buckets are `256 / levels` wide (integer division). When that division is
/// not exact the top bucket absorbs the remainder, so the index is clamped to
/// the last glyph.
///
/// # Panics
/// If `levels` is 0 or larger than 256
#[inline]
pub fn glyph_index(intensity: u8, levels: usize) -> usize {
    assert!(
        (1..=256).contains(&levels),
        "ramp must have between 1 and 256 glyphs"
    );

    let bucket_width = 256 / levels;
    let idx = usize::from(intensity) / bucket_width;
    idx.min(levels - 1)
}

/// Map every pixel of a luminance image to a glyph from `palette`
///
/// # Arguments
/// * `img` - Single-channel luminance image
/// * `palette` - Ramp to draw glyphs from
///
/// # Returns
/// A canvas with `img.height()` rows of `img.width()` glyphs each
pub fn map_to_ascii(img: &GrayImage, palette: &Palette) -> AsciiCanvas {
    let (width, height) = img.dimensions();
    let levels = palette.len();

    // Glyphs are single-byte ASCII, plus one terminator per row
    let mut text = String::with_capacity((width as usize + 1) * height as usize);

    for row in img.rows() {
        for pixel in row {
            text.push(palette.glyph(glyph_index(pixel[0], levels)));
        }
        text.push('\n');
    }

    AsciiCanvas {
        text,
        width,
        height,
    }
}
