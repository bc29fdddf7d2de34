//! Core pixel kernel for the join RGB node

use image::Rgba;

use crate::nodes::pixel::{brightness, PixelBuffer};

/// Combine three channel images; the output covers their common area.
/// Alpha is the mean of the three input alphas.
pub fn join_channels(red: &PixelBuffer, green: &PixelBuffer, blue: &PixelBuffer) -> PixelBuffer {
    let width = red.width().min(green.width()).min(blue.width());
    let height = red.height().min(green.height()).min(blue.height());
    PixelBuffer::from_fn(width, height, |x, y| {
        let r = red.get_pixel(x, y);
        let g = green.get_pixel(x, y);
        let b = blue.get_pixel(x, y);
        Rgba([
            brightness(*r),
            brightness(*g),
            brightness(*b),
            (r.0[3] + g.0[3] + b.0[3]) / 3.0,
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_averaged() {
        let r = PixelBuffer::from_pixel(2, 2, Rgba([0.3, 0.3, 0.3, 1.0]));
        let g = PixelBuffer::from_pixel(2, 2, Rgba([0.6, 0.6, 0.6, 0.5]));
        let b = PixelBuffer::from_pixel(3, 1, Rgba([0.9, 0.9, 0.9, 0.0]));
        let out = join_channels(&r, &g, &b);
        assert_eq!(out.dimensions(), (2, 1));
        let px = out.get_pixel(1, 0).0;
        assert_eq!(px[..3], [0.3, 0.6, 0.9]);
        assert!((px[3] - 0.5).abs() < 1e-6);
    }
}
