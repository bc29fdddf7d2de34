//! Geometric transform nodes

pub mod crop;
pub mod flip;
pub mod resize;
pub mod rotate;
