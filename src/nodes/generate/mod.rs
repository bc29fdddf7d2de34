//! Shape generator nodes

pub mod ellipse;
pub mod rectangle;
