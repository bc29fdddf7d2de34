//! Pixel buffers and color math shared by every image kernel
//!
//! Buffers are linear `f32` RGBA with channels in `0..=1`. A computed buffer is
//! wrapped in an [`Arc`] once it leaves its kernel and is never mutated again.

use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgba, Rgba32FImage};

use crate::error::{GraphError, GraphResult};

/// Owned RGBA float buffer produced by a kernel
pub type PixelBuffer = Rgba32FImage;

/// Read-only buffer held by an output socket
pub type SharedImage = Arc<PixelBuffer>;

/// Straight-alpha RGBA color
pub type Color = Rgba<f32>;

pub const BLACK: Color = Rgba([0.0, 0.0, 0.0, 1.0]);
pub const WHITE: Color = Rgba([1.0, 1.0, 1.0, 1.0]);
pub const LIME: Color = Rgba([0.0, 1.0, 0.0, 1.0]);
pub const TRANSPARENT: Color = Rgba([0.0, 0.0, 0.0, 0.0]);

/// Create a buffer filled with a single color
pub fn solid(width: u32, height: u32, color: Color) -> PixelBuffer {
    PixelBuffer::from_pixel(width, height, color)
}

/// Apply a per-pixel function, producing a buffer of the same size
pub fn map_pixels(src: &PixelBuffer, mut f: impl FnMut(Color) -> Color) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width(), src.height());
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        *dst = f(*px);
    }
    out
}

pub fn invert(c: Color) -> Color {
    let [r, g, b, a] = c.0;
    Rgba([1.0 - r, 1.0 - g, 1.0 - b, a])
}

/// Brightness in the HSB sense: the largest color channel
pub fn brightness(c: Color) -> f32 {
    let [r, g, b, _] = c.0;
    r.max(g).max(b)
}

/// Linear interpolation of all four channels, `t` clamped to `0..=1`
pub fn interpolate(start: Color, end: Color, t: f32) -> Color {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }
    let mut out = start;
    for (o, e) in out.0.iter_mut().zip(end.0) {
        *o += (e - *o) * t;
    }
    out
}

/// Convert RGB to (hue in degrees, saturation, brightness)
pub fn rgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let brightness = cmax;
    let saturation = if cmax != 0.0 { (cmax - cmin) / cmax } else { 0.0 };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = cmax - cmin;
        let redc = (cmax - r) / span;
        let greenc = (cmax - g) / span;
        let bluec = (cmax - b) / span;
        let mut h = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }
        h * 360.0
    };

    (hue, saturation, brightness)
}

/// Convert (hue in degrees, saturation, brightness) back to RGB
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (f32, f32, f32) {
    if saturation == 0.0 {
        return (brightness, brightness, brightness);
    }
    let normalized = (hue.rem_euclid(360.0)) / 360.0;
    let h = (normalized - normalized.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    }
}

/// Shift hue and scale saturation, brightness and opacity in HSB space
pub fn derive_color(
    c: Color,
    hue_shift: f32,
    saturation_factor: f32,
    brightness_factor: f32,
    opacity_factor: f32,
) -> Color {
    let [r, g, b, a] = c.0;
    let (h, s, mut v) = rgb_to_hsb(r, g, b);
    if v == 0.0 && brightness_factor > 1.0 {
        v = 0.05;
    }
    let h = (h + hue_shift).rem_euclid(360.0);
    let s = (s * saturation_factor).clamp(0.0, 1.0);
    let v = (v * brightness_factor).clamp(0.0, 1.0);
    let a = (a * opacity_factor).clamp(0.0, 1.0);
    let (r, g, b) = hsb_to_rgb(h, s, v);
    Rgba([r, g, b, a])
}

/// Format a color as `rgba(r, g, b, a)` with 8-bit color channels
pub fn format_color(c: Color) -> String {
    let [r, g, b, a] = c.0;
    format!(
        "rgba({}, {}, {}, {})",
        to_byte(r),
        to_byte(g),
        to_byte(b),
        a.clamp(0.0, 1.0)
    )
}

/// Parse `rgba(r, g, b, a)`, `rgb(r, g, b)`, `#rrggbb` or `#rrggbbaa`
pub fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (body, has_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = text.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let mut rgb = [0.0f32; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let value: u8 = part.parse().ok()?;
        *slot = f32::from(value) / 255.0;
    }
    let alpha = if has_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], alpha]))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return None;
    }
    let mut channels = [1.0f32; 4];
    for (i, slot) in channels.iter_mut().enumerate().take(hex.len() / 2) {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
        *slot = f32::from(byte) / 255.0;
    }
    Some(Rgba(channels))
}

fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decode any supported image file into a float RGBA buffer
pub fn load_image(path: &Path) -> GraphResult<PixelBuffer> {
    let decoded = image::open(path)?;
    Ok(decoded.to_rgba32f())
}

/// Encode a buffer as 8-bit RGBA PNG
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> GraphResult<()> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(GraphError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    let rgba8 = DynamicImage::ImageRgba32F(buffer.clone()).to_rgba8();
    rgba8.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        a.0.iter().zip(b.0).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_invert_keeps_alpha() {
        let c = invert(Rgba([1.0, 0.0, 0.5, 0.25]));
        assert_eq!(c.0, [0.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_interpolate_clamps_t() {
        let a = Rgba([0.0, 0.0, 0.0, 0.0]);
        let b = Rgba([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(interpolate(a, b, -2.0), a);
        assert_eq!(interpolate(a, b, 5.0), b);
        assert!(approx(interpolate(a, b, 0.5), Rgba([0.5, 0.5, 0.5, 0.5])));
    }

    #[test]
    fn test_hsb_round_trip() {
        for &(r, g, b) in &[(1.0, 0.0, 0.0), (0.2, 0.6, 0.4), (0.9, 0.9, 0.1), (0.3, 0.1, 0.8)] {
            let (h, s, v) = rgb_to_hsb(r, g, b);
            let (r2, g2, b2) = hsb_to_rgb(h, s, v);
            assert!((r - r2).abs() < 1e-4 && (g - g2).abs() < 1e-4 && (b - b2).abs() < 1e-4);
        }
    }

    #[test]
    fn test_derive_color_identity_and_opacity() {
        let c = Rgba([0.2, 0.6, 0.4, 1.0]);
        assert!(approx(derive_color(c, 0.0, 1.0, 1.0, 1.0), c));
        let faded = derive_color(c, 0.0, 1.0, 1.0, 0.5);
        assert!(approx(faded, Rgba([0.2, 0.6, 0.4, 0.5])));
    }

    #[test]
    fn test_derive_color_hue_shift_wraps() {
        let red = Rgba([1.0, 0.0, 0.0, 1.0]);
        let green = derive_color(red, 120.0, 1.0, 1.0, 1.0);
        assert!(approx(green, Rgba([0.0, 1.0, 0.0, 1.0])));
        let blue = derive_color(red, -120.0, 1.0, 1.0, 1.0);
        assert!(approx(blue, Rgba([0.0, 0.0, 1.0, 1.0])));
    }

    #[test]
    fn test_derive_color_lifts_black() {
        let lifted = derive_color(BLACK, 0.0, 1.0, 2.0, 1.0);
        assert!((brightness(lifted) - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_saving_empty_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_png(&PixelBuffer::new(0, 0), &dir.path().join("empty.png")).unwrap_err();
        assert!(matches!(err, GraphError::EmptyImage { width: 0, height: 0 }));
    }

    #[test]
    fn test_color_text_formats() {
        assert_eq!(format_color(LIME), "rgba(0, 255, 0, 1)");
        assert_eq!(parse_color("rgba(0, 255, 0, 1.0)"), Some(LIME));
        assert_eq!(parse_color("#000000"), Some(BLACK));
        assert_eq!(parse_color("#ffffff00").map(|c| c.0[3]), Some(0.0));
        assert!(parse_color("rgba(300, 0, 0, 1)").is_none());
        assert!(parse_color("chartreuse").is_none());

        let c = Rgba([51.0 / 255.0, 102.0 / 255.0, 1.0, 0.5]);
        let back = parse_color(&format_color(c)).unwrap();
        assert!(approx(c, back));
    }
}
