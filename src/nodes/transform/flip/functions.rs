//! Core kernel for the flip node

use image::imageops;

use crate::nodes::pixel::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipMode {
    Horizontal,
    Vertical,
    Both,
}

impl FlipMode {
    pub const OPTIONS: [&'static str; 3] = ["Horizontal", "Vertical", "Both"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Horizontal" => Some(Self::Horizontal),
            "Vertical" => Some(Self::Vertical),
            "Both" => Some(Self::Both),
            _ => None,
        }
    }
}

pub fn process_flip(input: &PixelBuffer, mode: FlipMode) -> PixelBuffer {
    match mode {
        FlipMode::Horizontal => imageops::flip_horizontal(input),
        FlipMode::Vertical => imageops::flip_vertical(input),
        FlipMode::Both => imageops::rotate180(input),
    }
}
