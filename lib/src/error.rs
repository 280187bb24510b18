//! Error type shared by every pipeline stage.

use std::path::PathBuf;

/// Errors that can occur while rendering an image to ASCII
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to open image file {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("width must be a positive integer, got {0}")]
    InvalidWidth(i64),

    #[error("style {index} does not exist ({available} styles available, indices 0-{})", available.saturating_sub(1))]
    InvalidStyle { index: i64, available: usize },

    #[error("output of {width}x{height} exceeds the limit of {limit} pixels, use a smaller width")]
    OutputTooLarge { width: u32, height: u32, limit: u64 },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("unable to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write to standard output")]
    Stdout(#[source] std::io::Error),
}
