//! Sockets: connection points on a node
//!
//! Sockets never hold references to each other. A connection is stored as a
//! [`SocketRef`] on both ends and the graph keeps the two ends in agreement.

use std::fmt;

use super::node::NodeId;
use super::pixel::SharedImage;

/// Index of a socket within its owner's input or output list
pub type PortId = usize;

/// Address of a socket inside a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SocketRef {
    pub node: NodeId,
    pub port: PortId,
}

impl SocketRef {
    pub fn new(node: NodeId, port: PortId) -> Self {
        Self { node, port }
    }
}

impl fmt::Display for SocketRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.port)
    }
}

/// Socket that receives an image from exactly one upstream output
#[derive(Debug, Clone)]
pub struct InputSocket {
    pub id: PortId,
    pub name: String,
    /// Whether processing needs this input to be present
    pub required: bool,
    /// Upstream output, if connected
    pub connection: Option<SocketRef>,
}

impl InputSocket {
    pub fn new(id: PortId, name: impl Into<String>, required: bool) -> Self {
        Self {
            id,
            name: name.into(),
            required,
            connection: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }
}

/// Socket that caches the last image its node produced
#[derive(Clone)]
pub struct OutputSocket {
    pub id: PortId,
    pub name: String,
    /// Downstream input, if connected
    pub connection: Option<SocketRef>,
    /// Set when the cached image no longer reflects upstream state
    pub needs_update: bool,
    pub image: Option<SharedImage>,
}

impl OutputSocket {
    /// New outputs start stale so the first read computes them
    pub fn new(id: PortId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            connection: None,
            needs_update: true,
            image: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }
}

impl fmt::Debug for OutputSocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSocket")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("connection", &self.connection)
            .field("needs_update", &self.needs_update)
            .field(
                "image",
                &self.image.as_ref().map(|img| (img.width(), img.height())),
            )
            .finish()
    }
}
