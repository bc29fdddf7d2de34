//! Core kernel for the ellipse generator

use crate::nodes::pixel::{Color, PixelBuffer, TRANSPARENT};

/// Ellipse inscribed in a `width` x `height` buffer. Pixels whose centre
/// falls inside get `color`, the rest stay transparent.
pub fn generate_ellipse(width: u32, height: u32, color: Color) -> Option<PixelBuffer> {
    if width == 0 || height == 0 {
        return None;
    }
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    Some(PixelBuffer::from_fn(width, height, |x, y| {
        let dx = (x as f32 + 0.5 - rx) / rx;
        let dy = (y as f32 + 0.5 - ry) / ry;
        if dx * dx + dy * dy <= 1.0 {
            color
        } else {
            TRANSPARENT
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::BLACK;

    #[test]
    fn test_centre_filled_corners_clear() {
        let out = generate_ellipse(10, 6, BLACK).unwrap();
        assert_eq!(*out.get_pixel(5, 3), BLACK);
        assert_eq!(*out.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*out.get_pixel(9, 5), TRANSPARENT);
        assert!(generate_ellipse(4, 0, BLACK).is_none());
    }
}
