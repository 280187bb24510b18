use std::path::Path;

use image::{GenericImageView, RgbaImage, imageops};

use crate::ascii::{AsciiCanvas, map_to_ascii};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::filters::to_grayscale;

/// Largest rescaled image, in pixels, the pipeline will allocate
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 26;

/// Open and decode an image file
///
/// # Errors
/// `RenderError::Load` if the file is missing, unreadable, or not a
/// supported image format
pub fn load_image(path: &Path) -> Result<RgbaImage, RenderError> {
    let img = image::open(path).map_err(|source| RenderError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    log::debug!(
        "loaded {} ({width}x{height}, {:?})",
        path.display(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Height that keeps the source aspect ratio at `target_width` columns
///
/// `floor(height / width * target_width)`, computed in f64.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let aspect_ratio = f64::from(height) / f64::from(width);
    (aspect_ratio * f64::from(target_width)).floor() as u32
}

/// Resize an image to `target_width` columns, preserving aspect ratio
///
/// # Arguments
/// * `input` - The image to resize
/// * `target_width` - Output width in pixels, must be > 0
/// * `filter` - Resampling filter
///
/// # Returns
/// An image of exactly `target_width` x `floor(H / W * target_width)`. For very
/// wide sources the height can round down to 0, giving an image with no rows.
///
/// # Errors
/// `InvalidWidth` for a zero width, `EmptyImage` if the source has no pixels,
/// `OutputTooLarge` if the target exceeds `MAX_OUTPUT_PIXELS`
pub fn rescale(
    input: &RgbaImage,
    target_width: u32,
    filter: imageops::FilterType,
) -> Result<RgbaImage, RenderError> {
    if target_width == 0 {
        return Err(RenderError::InvalidWidth(0));
    }

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }

    let target_height = scaled_height(width, height, target_width);
    log::debug!("rescaling {width}x{height} -> {target_width}x{target_height}");

    if u64::from(target_width) * u64::from(target_height) > MAX_OUTPUT_PIXELS {
        return Err(RenderError::OutputTooLarge {
            width: target_width,
            height: target_height,
            limit: MAX_OUTPUT_PIXELS,
        });
    }

    if target_height == 0 {
        return Ok(RgbaImage::new(target_width, 0));
    }
    if (width, height) == (target_width, target_height) {
        return Ok(input.clone());
    }

    Ok(imageops::resize(input, target_width, target_height, filter))
}

/// Run the conversion pipeline on an image file
///
/// 1. Validate width and style (before touching the file)
/// 2. Load and decode the image
/// 3. Rescale to the configured width
/// 4. Convert to luminance
/// 5. Map each pixel to a glyph of the selected style
///
/// # Errors
/// Any `RenderError` raised by validation or by one of the stages
pub fn render(path: &Path, config: &RenderConfig) -> Result<AsciiCanvas, RenderError> {
    config.validate()?;
    let image = load_image(path)?;
    render_image(&image, config)
}

/// Run the conversion pipeline on an already decoded image
///
/// # Errors
/// `InvalidWidth`/`InvalidStyle` for a bad config, `EmptyImage` for an image
/// without pixels
pub fn render_image(input: &RgbaImage, config: &RenderConfig) -> Result<AsciiCanvas, RenderError> {
    config.validate()?;
    let style = config.palette()?;

    let resized = rescale(input, config.width, config.filter)?;
    let gray = to_grayscale(&resized);
    let canvas = map_to_ascii(&gray, &style);

    log::debug!(
        "rendered {}x{} glyphs with style {}",
        canvas.width(),
        canvas.height(),
        style.index()
    );
    Ok(canvas)
}
