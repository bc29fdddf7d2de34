//! Core kernel for the composite node

use crate::nodes::pixel::{interpolate, PixelBuffer};

/// Blend `top` onto `bottom` with its top-left corner at `(x_offset, y_offset)`.
/// Inside the overlap the weight is `blend * top.alpha`; elsewhere the
/// bottom passes through.
pub fn process_composite(
    top: &PixelBuffer,
    bottom: &PixelBuffer,
    blend: f32,
    x_offset: u32,
    y_offset: u32,
) -> PixelBuffer {
    let mut out = bottom.clone();
    let x_end = bottom.width().min(x_offset.saturating_add(top.width()));
    let y_end = bottom.height().min(y_offset.saturating_add(top.height()));
    for y in y_offset..y_end {
        for x in x_offset..x_end {
            let over = *top.get_pixel(x - x_offset, y - y_offset);
            let under = *bottom.get_pixel(x, y);
            out.put_pixel(x, y, interpolate(under, over, blend * over.0[3]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::{BLACK, WHITE};
    use image::Rgba;

    #[test]
    fn test_opaque_top_replaces_overlap() {
        let top = PixelBuffer::from_pixel(2, 2, WHITE);
        let bottom = PixelBuffer::from_pixel(3, 3, BLACK);
        let out = process_composite(&top, &bottom, 1.0, 2, 2);
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(*out.get_pixel(2, 2), WHITE);
        assert_eq!(*out.get_pixel(1, 1), BLACK);
    }

    #[test]
    fn test_blend_weights_by_top_alpha() {
        let top = PixelBuffer::from_pixel(1, 1, Rgba([1.0, 1.0, 1.0, 0.5]));
        let bottom = PixelBuffer::from_pixel(1, 1, BLACK);
        let out = process_composite(&top, &bottom, 0.5, 0, 0);
        let px = out.get_pixel(0, 0).0;
        assert!((px[0] - 0.25).abs() < 1e-6);
        assert!((px[3] - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_offset_past_bottom_is_identity() {
        let top = PixelBuffer::from_pixel(2, 2, WHITE);
        let bottom = PixelBuffer::from_pixel(2, 2, BLACK);
        assert_eq!(process_composite(&top, &bottom, 1.0, 5, 0), bottom);
    }
}
