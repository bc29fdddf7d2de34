//! Core pixel kernel for the invert node

use crate::nodes::pixel::{self, PixelBuffer};

/// Replace each color channel `c` with `1 - c`
pub fn process_invert(input: &PixelBuffer) -> PixelBuffer {
    pixel::map_pixels(input, pixel::invert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_single_pixel() {
        let input = PixelBuffer::from_pixel(1, 1, Rgba([1.0, 0.0, 0.5, 1.0]));
        let out = process_invert(&input);
        assert_eq!(*out.get_pixel(0, 0), Rgba([0.0, 1.0, 0.5, 1.0]));
    }
}
