//! Core kernel for the matte node

use image::Rgba;

use crate::nodes::pixel::{brightness, PixelBuffer};

/// Base colors with alpha `1 - brightness(matte)`. Base pixels the matte
/// does not cover become fully transparent.
pub fn process_matte(matte: &PixelBuffer, base: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_fn(base.width(), base.height(), |x, y| {
        let [r, g, b, _] = base.get_pixel(x, y).0;
        let alpha = if x < matte.width() && y < matte.height() {
            1.0 - brightness(*matte.get_pixel(x, y))
        } else {
            0.0
        };
        Rgba([r, g, b, alpha])
    })
}
