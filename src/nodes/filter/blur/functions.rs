//! Separable gaussian blur on float RGBA buffers

use image::Rgba;

use crate::nodes::pixel::PixelBuffer;

/// Normalized weights for offsets `-radius..=radius`, sigma = radius / 2
pub fn gaussian_kernel(radius: u32) -> Vec<f32> {
    if radius == 0 {
        return vec![1.0];
    }
    let sigma = radius as f32 / 2.0;
    let denom = 2.0 * sigma * sigma;
    let r = radius as i32;
    let weights: Vec<f32> = (-r..=r)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

/// Horizontal then vertical pass; samples past the edge clamp to it
pub fn process_blur(input: &PixelBuffer, radius: u32) -> PixelBuffer {
    let kernel = gaussian_kernel(radius);
    let tmp = pass(input, &kernel, true);
    pass(&tmp, &kernel, false)
}

fn pass(src: &PixelBuffer, kernel: &[f32], horizontal: bool) -> PixelBuffer {
    let (w, h) = src.dimensions();
    let radius = (kernel.len() / 2) as i64;
    PixelBuffer::from_fn(w, h, |x, y| {
        let mut acc = [0.0f32; 4];
        for (ki, &kw) in kernel.iter().enumerate() {
            let d = ki as i64 - radius;
            let (sx, sy) = if horizontal {
                ((i64::from(x) + d).clamp(0, i64::from(w) - 1) as u32, y)
            } else {
                (x, (i64::from(y) + d).clamp(0, i64::from(h) - 1) as u32)
            };
            let px = src.get_pixel(sx, sy);
            for (a, c) in acc.iter_mut().zip(px.0) {
                *a += kw * c;
            }
        }
        Rgba(acc)
    })
}
