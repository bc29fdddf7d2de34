//! Core kernel for the resize node

use crate::nodes::pixel::PixelBuffer;

/// `out[x, y] = in[floor(x * src_w / dst_w), floor(y * src_h / dst_h)]`
pub fn process_resize(input: &PixelBuffer, width: u32, height: u32) -> Option<PixelBuffer> {
    let (src_w, src_h) = input.dimensions();
    if src_w == 0 || src_h == 0 || width == 0 || height == 0 {
        return None;
    }
    Some(PixelBuffer::from_fn(width, height, |x, y| {
        let sx = (u64::from(x) * u64::from(src_w) / u64::from(width)) as u32;
        let sy = (u64::from(y) * u64::from(src_h) / u64::from(height)) as u32;
        *input.get_pixel(sx, sy)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_uniform_image_stays_uniform() {
        let red = Rgba([1.0, 0.0, 0.0, 1.0]);
        let input = PixelBuffer::from_pixel(4, 4, red);
        let out = process_resize(&input, 2, 2).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert!(out.pixels().all(|px| *px == red));
    }

    #[test]
    fn test_nearest_neighbour_sampling() {
        let input = PixelBuffer::from_fn(4, 1, |x, _| Rgba([x as f32, 0.0, 0.0, 1.0]));
        let down = process_resize(&input, 2, 1).unwrap();
        assert_eq!(down.get_pixel(0, 0).0[0], 0.0);
        assert_eq!(down.get_pixel(1, 0).0[0], 2.0);

        let up = process_resize(&input, 8, 1).unwrap();
        let xs: Vec<f32> = up.pixels().map(|px| px.0[0]).collect();
        assert_eq!(xs, vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }
}
