//! Core pixel kernel for the split RGB node

use image::Rgba;

use crate::nodes::pixel::{self, PixelBuffer};

/// Grayscale image carrying one channel (0 = red, 1 = green, 2 = blue)
/// in all three color channels, with the source alpha
pub fn extract_channel(input: &PixelBuffer, channel: usize) -> PixelBuffer {
    pixel::map_pixels(input, |c| {
        let v = c.0[channel.min(2)];
        Rgba([v, v, v, c.0[3]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_become_gray() {
        let input = PixelBuffer::from_pixel(1, 1, Rgba([0.1, 0.5, 0.9, 0.7]));
        assert_eq!(*extract_channel(&input, 0).get_pixel(0, 0), Rgba([0.1, 0.1, 0.1, 0.7]));
        assert_eq!(*extract_channel(&input, 1).get_pixel(0, 0), Rgba([0.5, 0.5, 0.5, 0.7]));
        assert_eq!(*extract_channel(&input, 2).get_pixel(0, 0), Rgba([0.9, 0.9, 0.9, 0.7]));
    }
}
