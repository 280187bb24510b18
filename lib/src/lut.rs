//! Glyph ramp lookup tables
//!
//! The registry is fixed at compile time. Each ramp discretizes the 0-255
//! intensity range into as many buckets as it has glyphs; the first glyph
//! covers the darkest pixels.

use crate::error::RenderError;

/// Dense-to-light ramp, the default style
const RAMP_DENSE: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Dense-to-light with a wider blank band and a trailing comma
const RAMP_DENSE_WIDE: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' ', ' ', ','];

/// Dense-to-light with underscores for the brightest highlights
const RAMP_DENSE_TEXTURED: &[char] = &[
    '@', '%', '#', '*', '+', '=', '-', ':', '.', ' ', ' ', ' ', ';', ',', '_',
];

/// Light-to-dense, for light terminal backgrounds
const RAMP_LIGHT: &[char] = &[' ', '.', '-', '+', '=', '*', '#', '%', '@', '@'];

/// Light-to-dense with commas in the shadows
const RAMP_LIGHT_SOFT: &[char] = &[' ', ',', '-', ':', '.', '+', '=', '*', '#', '%', '@', '@'];

/// Light-to-dense with underscores in the shadows
const RAMP_LIGHT_TEXTURED: &[char] = &[
    '_', ';', ',', ' ', ' ', ' ', '.', '-', '+', '=', '*', '#', '%', '@', '@',
];

/// Number of registered styles
pub const PALETTE_COUNT: usize = 6;

/// Every style, indexed by the `--style` argument
pub static PALETTES: [&[char]; PALETTE_COUNT] = [
    RAMP_DENSE,
    RAMP_DENSE_WIDE,
    RAMP_DENSE_TEXTURED,
    RAMP_LIGHT,
    RAMP_LIGHT_SOFT,
    RAMP_LIGHT_TEXTURED,
];

/// A glyph ramp selected from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    index: usize,
    glyphs: &'static [char],
}

impl Palette {
    /// Registry index this palette was selected with
    pub fn index(&self) -> usize {
        self.index
    }

    /// Glyphs ordered from the lowest intensity bucket to the highest
    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    /// Number of glyphs, always at least one
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True only for a ramp without glyphs, which the registry never holds
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a bucket index; callers clamp first
    pub fn glyph(&self, idx: usize) -> char {
        self.glyphs[idx]
    }

    /// True if `ch` belongs to this ramp
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }
}

/// Look up a style by index
///
/// Takes a signed index so that values coming straight from the command line
/// (including negative ones) are rejected with a clear error.
///
/// # Errors
/// `RenderError::InvalidStyle` if the index is outside the registry
pub fn palette(index: i64) -> Result<Palette, RenderError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| PALETTES.get(i).map(|glyphs| Palette { index: i, glyphs: *glyphs }))
        .ok_or(RenderError::InvalidStyle {
            index,
            available: PALETTE_COUNT,
        })
}

/// Iterate over every registered style in index order
pub fn palettes() -> impl Iterator<Item = Palette> {
    PALETTES
        .iter()
        .enumerate()
        .map(|(index, glyphs)| Palette { index, glyphs: *glyphs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_non_empty_styles() {
        assert_eq!(PALETTE_COUNT, 6);
        assert!(palettes().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_default_style_glyphs() {
        let p = palette(0).unwrap();
        let s: String = p.glyphs().iter().collect();
        assert_eq!(s, "@%#*+=-:. ");
        assert_eq!(p.len(), 10);
    }

    #[test]
    fn test_style_lengths() {
        let lengths: Vec<usize> = palettes().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![10, 12, 15, 10, 12, 15]);
    }

    #[test]
    fn test_palette_out_of_range() {
        match palette(99) {
            Err(RenderError::InvalidStyle { index, available }) => {
                assert_eq!(index, 99);
                assert_eq!(available, 6);
            }
            other => panic!("expected InvalidStyle, got {other:?}"),
        }
        assert!(palette(6).is_err());
    }

    #[test]
    fn test_palette_negative_index() {
        assert!(matches!(
            palette(-1),
            Err(RenderError::InvalidStyle { index: -1, .. })
        ));
    }

    #[test]
    fn test_palettes_iterates_in_order() {
        for (i, p) in palettes().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(palette(i as i64).unwrap(), p);
        }
    }
}
