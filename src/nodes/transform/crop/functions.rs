//! Core kernel for the crop node

use image::imageops;

use crate::nodes::pixel::PixelBuffer;

/// Requested crop rectangle in source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Shrink the region so it fits inside a `width` x `height` image.
    /// Returns `None` when nothing of it remains.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<CropRegion> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let clamped = CropRegion {
            width: self.width.min(width - self.x),
            height: self.height.min(height - self.y),
            ..self
        };
        (clamped.width > 0 && clamped.height > 0).then_some(clamped)
    }
}

pub fn process_crop(input: &PixelBuffer, region: CropRegion) -> Option<PixelBuffer> {
    let r = region.clamp_to(input.width(), input.height())?;
    Some(imageops::crop_imm(input, r.x, r.y, r.width, r.height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::BLACK;
    use image::Rgba;

    fn region(x: u32, y: u32, width: u32, height: u32) -> CropRegion {
        CropRegion { x, y, width, height }
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let input = PixelBuffer::from_pixel(100, 100, BLACK);
        let out = process_crop(&input, region(90, 90, 50, 50)).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
    }

    #[test]
    fn test_crop_copies_the_right_pixels() {
        let input = PixelBuffer::from_fn(4, 4, |x, y| Rgba([x as f32, y as f32, 0.0, 1.0]));
        let out = process_crop(&input, region(1, 2, 2, 2)).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([1.0, 2.0, 0.0, 1.0]));
        assert_eq!(*out.get_pixel(1, 1), Rgba([2.0, 3.0, 0.0, 1.0]));
    }

    #[test]
    fn test_crop_outside_or_empty_is_absent() {
        let input = PixelBuffer::from_pixel(10, 10, BLACK);
        assert!(process_crop(&input, region(10, 0, 5, 5)).is_none());
        assert!(process_crop(&input, region(0, 0, 0, 5)).is_none());
    }
}
