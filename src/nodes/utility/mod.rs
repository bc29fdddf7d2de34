//! Utility nodes

pub mod test;
