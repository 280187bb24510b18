//! glyphramp - image to ASCII art converter
//!
//! Loads an image, rescales it to a target width while keeping its aspect
//! ratio, reduces it to luminance and maps every pixel onto a glyph ramp.
//!
//! # Example
//! ```no_run
//! use glyphramp::{Output, RenderConfig, render};
//! use std::path::Path;
//!
//! let config = RenderConfig { width: 80, ..RenderConfig::default() };
//! let art = render(Path::new("photo.jpg"), &config).unwrap();
//! Output::Stdout.emit(&art).unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;
pub mod sink;

// Re-export main types for convenience
pub use image;
pub use ascii::{AsciiCanvas, glyph_index, map_to_ascii};
pub use config::{DEFAULT_WIDTH, RenderConfig};
pub use error::RenderError;
pub use filters::to_grayscale;
pub use lut::{PALETTE_COUNT, Palette, palette, palettes};
pub use processor::{MAX_OUTPUT_PIXELS, load_image, render, render_image, rescale};
pub use sink::Output;
