//! Node system - graph core, evaluation engine and the built-in node library

// Core node system modules
pub mod graph;
pub mod node;
pub mod port;
pub mod pixel;
pub mod property;
pub mod factory;
pub mod interface;
pub mod defaults;
pub mod execution_engine;
pub mod hooks;

// Node library
pub mod io;
pub mod generate;
pub mod color;
pub mod transform;
pub mod compositing;
pub mod filter;
pub mod utility;

// Re-export core types
pub use graph::{Connection, NodeGraph};
pub use node::{Node, NodeId, NodeState, ProcessFn, NAME_PROPERTY};
pub use port::{InputSocket, OutputSocket, PortId, SocketRef};
pub use property::{Property, PropertyKind, PropertyValue};

// Re-export factory types
pub use factory::{NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition, ProcessingCost};

// Re-export execution engine types
pub use execution_engine::ExecutionStats;
pub use hooks::{GraphHooks, LoggingHooks};
