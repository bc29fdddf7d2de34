//! Core kernel for the rectangle generator

use crate::nodes::pixel::{self, Color, PixelBuffer};

/// A `width` x `height` buffer filled with `color`; empty sizes give nothing
pub fn generate_rectangle(width: u32, height: u32, color: Color) -> Option<PixelBuffer> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(pixel::solid(width, height, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::LIME;

    #[test]
    fn test_every_pixel_is_filled() {
        let out = generate_rectangle(3, 5, LIME).unwrap();
        assert_eq!(out.dimensions(), (3, 5));
        assert!(out.pixels().all(|px| *px == LIME));
        assert!(generate_rectangle(0, 5, LIME).is_none());
    }
}
