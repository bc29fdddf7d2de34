//! Per-pixel color nodes

pub mod chroma_key;
pub mod color_effects;
pub mod invert;
pub mod join_rgb;
pub mod opacity;
pub mod split_rgb;
