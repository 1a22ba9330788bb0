use image::{RgbaImage, imageops::FilterType};

use crate::color::Color;

const SCALE: f32 = 0.1;

/// Top left, top right, center, bottom left, bottom right.
const SAMPLE_POINTS: [(f32, f32); 5] = [(0.2, 0.2), (0.8, 0.2), (0.5, 0.5), (0.2, 0.8), (0.8, 0.8)];

/// Reads five fixed regions of a downscaled copy of the cover.
pub(crate) fn sample_regions(image: &RgbaImage) -> Vec<String> {
    let width = ((image.width() as f32 * SCALE) as u32).max(1);
    let height = ((image.height() as f32 * SCALE) as u32).max(1);
    let small = image::imageops::resize(image, width, height, FilterType::Nearest);

    SAMPLE_POINTS
        .iter()
        .map(|(x, y)| {
            let px = ((x * width as f32) as u32).min(width - 1);
            let py = ((y * height as f32) as u32).min(height - 1);
            let pixel = small.get_pixel(px, py);
            Color::new(pixel[0], pixel[1], pixel[2]).hex()
        })
        .collect()
}
