//! pixflow - node-based image processing
//!
//! Images flow through a graph of nodes. Each node turns its input images
//! and properties into output images; edits mark downstream outputs stale
//! and reading a node recomputes only what is stale.

pub mod batch;
pub mod config;
pub mod constants;
pub mod error;
pub mod nodes;
pub mod persistence;

// Re-export commonly used types
pub use batch::{BatchProcess, BatchReport};
pub use config::EngineConfig;
pub use error::{GraphError, GraphResult};
pub use nodes::{NodeGraph, NodeId, NodeRegistry, SocketRef};
