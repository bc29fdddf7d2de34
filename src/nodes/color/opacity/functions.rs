//! Core pixel kernel for the opacity node

use crate::nodes::pixel::{self, PixelBuffer};

/// Multiply alpha by `factor`; color channels pass through HSB unchanged
pub fn process_opacity(input: &PixelBuffer, factor: f32) -> PixelBuffer {
    pixel::map_pixels(input, |c| pixel::derive_color(c, 0.0, 1.0, 1.0, factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_only_alpha_changes() {
        let input = PixelBuffer::from_pixel(1, 1, Rgba([0.0, 1.0, 0.0, 0.8]));
        let out = process_opacity(&input, 0.5);
        let px = out.get_pixel(0, 0).0;
        assert!((px[1] - 1.0).abs() < 1e-6);
        assert!((px[3] - 0.4).abs() < 1e-6);
    }
}
