use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::map::map_pixels;

/// Luminance of one RGBA pixel using the ITU-R BT.601 weights
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B, in integer math with the
/// coefficients scaled by 1000. Alpha is ignored.
#[inline]
pub fn luminance(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    // 299 + 587 + 114 = 1000, so the result never exceeds 255
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Convert an RGBA image to a single-channel luminance image
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with the same dimensions, one intensity in [0, 255] per pixel
pub fn to_grayscale(img: &RgbaImage) -> GrayImage {
    map_pixels(img, |pixel| Luma([luminance(pixel)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(Rgba([0, 0, 0, 255])), 0);
        assert_eq!(luminance(Rgba([255, 255, 255, 255])), 255);
    }

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(luminance(Rgba([255, 0, 0, 255])), 76);
        assert_eq!(luminance(Rgba([0, 255, 0, 255])), 149);
        assert_eq!(luminance(Rgba([0, 0, 255, 255])), 29);
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        assert_eq!(
            luminance(Rgba([120, 60, 30, 0])),
            luminance(Rgba([120, 60, 30, 255]))
        );
    }

    #[test]
    fn test_gray_input_is_preserved() {
        for v in [0u8, 1, 64, 128, 200, 254, 255] {
            assert_eq!(luminance(Rgba([v, v, v, 255])), v);
        }
    }

    #[test]
    fn test_to_grayscale_keeps_dimensions() {
        let img = RgbaImage::from_pixel(7, 3, Rgba([10, 200, 30, 255]));
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (7, 3));
        assert!(gray.pixels().all(|p| p[0] == luminance(Rgba([10, 200, 30, 255]))));
    }
}
