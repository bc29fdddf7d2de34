//! Core kernel for the rotate node

use image::imageops;

use crate::nodes::pixel::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateMode {
    /// Clockwise: source `(x, y)` lands on `(h - 1 - y, x)`
    Right90,
    /// Counter-clockwise: source `(x, y)` lands on `(y, w - 1 - x)`
    Left90,
    Rotate180,
}

impl RotateMode {
    pub const OPTIONS: [&'static str; 3] = ["Right 90", "Left 90", "Rotate 180"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Right 90" => Some(Self::Right90),
            "Left 90" => Some(Self::Left90),
            "Rotate 180" => Some(Self::Rotate180),
            _ => None,
        }
    }
}

pub fn process_rotate(input: &PixelBuffer, mode: RotateMode) -> PixelBuffer {
    match mode {
        RotateMode::Right90 => imageops::rotate90(input),
        RotateMode::Left90 => imageops::rotate270(input),
        RotateMode::Rotate180 => imageops::rotate180(input),
    }
}
