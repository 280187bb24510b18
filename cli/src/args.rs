//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glyphramp::image::imageops::FilterType;

/// Convert an image into ASCII art
#[derive(Parser, Debug)]
#[command(name = "glyphramp")]
#[command(version, about = "Render an image as ASCII art", long_about = None)]
pub struct Args {
    /// Input image file
    #[arg(required_unless_present = "list_styles")]
    pub image: Option<PathBuf>,

    /// Write the ASCII art to this file instead of printing it
    #[arg(short, long = "output_file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Glyph ramp index (see --list-styles)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub style: i64,

    /// Output width in characters
    #[arg(short, long, default_value_t = i64::from(glyphramp::DEFAULT_WIDTH), allow_negative_numbers = true)]
    pub width: i64,

    /// Resampling filter used when resizing
    #[arg(long, value_enum, default_value_t = ResizeFilter::Lanczos3)]
    pub filter: ResizeFilter,

    /// Print every available style and exit
    #[arg(long)]
    pub list_styles: bool,
}

/// Resampling filter for the rescale step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
