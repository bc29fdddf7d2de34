//! Nodes that combine two images

pub mod composite;
pub mod matte;
pub mod watermark;
