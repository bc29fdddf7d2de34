//! Core pixel kernel for the chroma key node

use image::Rgba;

use crate::nodes::pixel::{self, Color, PixelBuffer};

/// True when every color channel is within `threshold` of the key
pub fn matches_key(c: Color, key: Color, threshold: f32) -> bool {
    c.0.iter()
        .zip(key.0.iter())
        .take(3)
        .all(|(a, b)| (a - b).abs() < threshold)
}

/// Clear alpha on every pixel that matches the key color
pub fn process_chroma_key(input: &PixelBuffer, key: Color, threshold: f32) -> PixelBuffer {
    pixel::map_pixels(input, |c| {
        if matches_key(c, key, threshold) {
            let [r, g, b, _] = c.0;
            Rgba([r, g, b, 0.0])
        } else {
            c
        }
    })
}
