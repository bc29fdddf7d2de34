//! Core kernel for the watermark node

use crate::nodes::pixel::{interpolate, PixelBuffer};

/// Blend `mark` over `base` with its top-left corner at a fraction of the
/// base size, weighted by the watermark's alpha
pub fn process_watermark(base: &PixelBuffer, mark: &PixelBuffer, x_fraction: f32, y_fraction: f32) -> PixelBuffer {
    let x_offset = (base.width() as f32 * x_fraction.clamp(0.0, 1.0)) as u32;
    let y_offset = (base.height() as f32 * y_fraction.clamp(0.0, 1.0)) as u32;

    let mut out = base.clone();
    let x_end = base.width().min(x_offset.saturating_add(mark.width()));
    let y_end = base.height().min(y_offset.saturating_add(mark.height()));
    for y in y_offset..y_end {
        for x in x_offset..x_end {
            let over = *mark.get_pixel(x - x_offset, y - y_offset);
            let under = *base.get_pixel(x, y);
            out.put_pixel(x, y, interpolate(under, over, over.0[3]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::{BLACK, TRANSPARENT, WHITE};

    #[test]
    fn test_watermark_at_half_offset() {
        let base = PixelBuffer::from_pixel(4, 4, BLACK);
        let mark = PixelBuffer::from_pixel(4, 4, WHITE);
        let out = process_watermark(&base, &mark, 0.5, 0.5);
        assert_eq!(*out.get_pixel(1, 1), BLACK);
        assert_eq!(*out.get_pixel(2, 2), WHITE);
        assert_eq!(*out.get_pixel(3, 3), WHITE);
        assert_eq!(*out.get_pixel(3, 1), BLACK);
    }

    #[test]
    fn test_transparent_watermark_changes_nothing() {
        let base = PixelBuffer::from_pixel(3, 3, BLACK);
        let mark = PixelBuffer::from_pixel(3, 3, TRANSPARENT);
        assert_eq!(process_watermark(&base, &mark, 0.0, 0.0), base);
    }

    #[test]
    fn test_full_offset_is_outside() {
        let base = PixelBuffer::from_pixel(3, 3, BLACK);
        let mark = PixelBuffer::from_pixel(3, 3, WHITE);
        assert_eq!(process_watermark(&base, &mark, 1.0, 1.0), base);
    }
}
