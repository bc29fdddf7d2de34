//! Filter nodes

pub mod blur;
