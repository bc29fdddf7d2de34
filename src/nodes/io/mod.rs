//! File input and output nodes

pub mod file_in;
pub mod file_out;
