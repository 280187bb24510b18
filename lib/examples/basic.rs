/// Basic example: Convert a synthetic test image to ASCII art
///
/// This creates a test image with a gradient background and a circle, then
/// prints it once per registered style
use glyphramp::{Output, RenderConfig, palettes, render_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("glyphramp - Basic Example");
    println!("=========================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::new(width, height);

    // Left-to-right gradient
    for y in 0..height {
        for x in 0..width {
            let gray = (x * 255 / width) as u8;
            img.put_pixel(x, y, Rgba([gray, gray, gray, 255]));
        }
    }

    // Draw a white circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 3.0 {
                // Black outline
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    for p in palettes() {
        let config = RenderConfig {
            width: 60,
            style: p.index(),
            ..RenderConfig::default()
        };

        let art = render_image(&img, &config).expect("Failed to render");
        println!("Style {} ({}x{}):", p.index(), art.width(), art.height());
        Output::Stdout.emit(&art).expect("Failed to print");
    }
}
