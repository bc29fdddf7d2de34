//! Graph persistence: the text file format and document state

pub mod file_manager;
pub mod format;

pub use file_manager::FileManager;
pub use format::{load_graph, read_graph, save_graph, write_graph};
