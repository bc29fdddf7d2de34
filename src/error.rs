//! Error types for graph construction, evaluation and persistence

use crate::nodes::{NodeId, PortId};

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("node {0} is not in the graph")]
    MissingNode(NodeId),

    #[error("node {node} has no socket {port}")]
    InvalidSocket { node: NodeId, port: PortId },

    #[error("cannot connect a node to itself")]
    SelfConnection,

    #[error("connecting node {from} to node {to} would create a cycle")]
    Cycle { from: NodeId, to: NodeId },

    #[error("invalid property value: {0}")]
    InvalidProperty(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("node {0} has no image to save")]
    MissingImage(NodeId),

    #[error("cannot save an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("image is {width}x{height}, larger than the limit of {limit}")]
    ImageTooLarge { width: u32, height: u32, limit: u32 },

    #[error("batch process is incomplete: {0}")]
    BatchIncomplete(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl GraphError {
    pub fn invalid_property(msg: impl Into<String>) -> Self {
        Self::InvalidProperty(msg.into())
    }

    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    pub fn batch_incomplete(msg: impl Into<String>) -> Self {
        Self::BatchIncomplete(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures that come from the file system or image codecs
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Image(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert!(GraphError::parse(7, "bad uid")
            .to_string()
            .contains("line 7: bad uid"));
        assert!(GraphError::invalid_property("x")
            .to_string()
            .contains("invalid property value:"));
        assert!(GraphError::Cycle { from: 2, to: 0 }
            .to_string()
            .contains("cycle"));
        assert!(GraphError::batch_incomplete("no output directory")
            .to_string()
            .contains("no output directory"));
    }

    #[test]
    fn io_errors_convert_and_classify() {
        let err: GraphError = std::io::Error::other("boom").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("boom"));
        assert!(!GraphError::SelfConnection.is_io());
    }
}
