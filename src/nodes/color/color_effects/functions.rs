//! Core pixel kernel for the color effects node

use crate::nodes::pixel::{self, PixelBuffer};

/// Apply a hue shift in degrees and saturation/brightness factors
pub fn process_color_effects(
    input: &PixelBuffer,
    hue_shift: f32,
    saturation: f32,
    brightness: f32,
) -> PixelBuffer {
    pixel::map_pixels(input, |c| {
        pixel::derive_color(c, hue_shift, saturation, brightness, 1.0)
    })
}
