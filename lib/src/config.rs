use image::imageops::FilterType;

use crate::error::RenderError;
use crate::lut::{Palette, palette};

/// Default output width in characters
pub const DEFAULT_WIDTH: u32 = 50;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Output width in characters, must be > 0
    pub width: u32,
    /// Index into the glyph ramp registry
    pub style: usize,
    /// Resampling filter used by the rescaler
    pub filter: FilterType,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            style: 0,
            filter: FilterType::Lanczos3,
        }
    }
}

impl RenderConfig {
    /// Build a config from raw, possibly negative, user input
    ///
    /// # Errors
    /// `InvalidWidth` for a width outside `1..=u32::MAX`, `InvalidStyle` for a
    /// style outside the registry
    pub fn from_args(width: i64, style: i64) -> Result<Self, RenderError> {
        let width = u32::try_from(width)
            .ok()
            .filter(|w| *w > 0)
            .ok_or(RenderError::InvalidWidth(width))?;
        let style = palette(style)?.index();

        let config = Self {
            width,
            style,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::InvalidWidth(0));
        }
        self.palette()?;
        Ok(())
    }

    /// The glyph ramp selected by `style`
    ///
    /// # Errors
    /// `RenderError::InvalidStyle` if `style` is outside the registry
    pub fn palette(&self) -> Result<Palette, RenderError> {
        palette(i64::try_from(self.style).unwrap_or(i64::MAX))
    }

    /// Replace the resampling filter
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}
