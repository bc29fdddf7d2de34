//! Node types and core node functionality

use std::fmt;

use egui::{Color32, Pos2};

use super::interface::ProcessContext;
use super::pixel::SharedImage;
use super::port::{InputSocket, OutputSocket, PortId};
use super::property::Property;

/// Unique identifier for a node
pub type NodeId = usize;

/// Index of the name property every node carries
pub const NAME_PROPERTY: usize = 0;

/// Kernel signature: one entry per output socket, `None` meaning "no image"
pub type ProcessFn = fn(&ProcessContext) -> Vec<Option<SharedImage>>;

/// Output state as seen from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Every output is up to date
    Fresh,
    /// At least one output must be recomputed before it is read
    Stale,
}

/// A unit of computation in the image graph
#[derive(Clone)]
pub struct Node {
    pub id: NodeId,
    /// Stable type identifier used by the registry and graph files
    pub type_name: &'static str,
    /// Display name the node starts with
    pub base_name: &'static str,
    /// Current display name, mirrors the name property
    pub title: String,
    pub position: Pos2,
    pub color: Color32,
    pub inputs: Vec<InputSocket>,
    pub outputs: Vec<OutputSocket>,
    pub properties: Vec<Property>,
    processor: Option<ProcessFn>,
    evaluations: u64,
}

impl Node {
    /// Creates a node with only its name property and no sockets
    pub fn new(type_name: &'static str, base_name: &'static str, position: Pos2) -> Self {
        Self {
            id: 0,
            type_name,
            base_name,
            title: base_name.to_string(),
            position,
            color: Color32::from_rgb(60, 60, 60),
            inputs: vec![],
            outputs: vec![],
            properties: vec![Property::text("Name", base_name)],
            processor: None,
            evaluations: 0,
        }
    }

    /// Plain node with one input, one output and no kernel; processing
    /// leaves the output untouched.
    pub fn pass_through(position: Pos2) -> Self {
        let mut node = Self::new("node", "Node", position);
        node.add_input("Input", true);
        node.add_output("Output");
        node
    }

    /// Adds an input socket
    pub fn add_input(&mut self, name: &str, required: bool) -> PortId {
        let id = self.inputs.len();
        self.inputs.push(InputSocket::new(id, name, required));
        id
    }

    /// Adds an output socket
    pub fn add_output(&mut self, name: &str) -> PortId {
        let id = self.outputs.len();
        self.outputs.push(OutputSocket::new(id, name));
        id
    }

    pub fn add_property(&mut self, property: Property) -> usize {
        self.properties.push(property);
        self.properties.len() - 1
    }

    pub fn set_processor(&mut self, processor: ProcessFn) {
        self.processor = Some(processor);
    }

    pub fn processor(&self) -> Option<ProcessFn> {
        self.processor
    }

    pub fn name(&self) -> &str {
        &self.title
    }

    pub fn property(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Number of times the kernel has run
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub(crate) fn record_evaluation(&mut self) {
        self.evaluations += 1;
    }

    pub fn state(&self) -> NodeState {
        if self.outputs.iter().any(|o| o.needs_update) {
            NodeState::Stale
        } else {
            NodeState::Fresh
        }
    }

    /// Breaks the link on this node's side only; the graph clears the peers
    pub(crate) fn clear_connections(&mut self) {
        for input in &mut self.inputs {
            input.connection = None;
        }
        for output in &mut self.outputs {
            output.connection = None;
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("type_name", &self.type_name)
            .field("title", &self.title)
            .field("position", &self.position)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("properties", &self.properties)
            .field("evaluations", &self.evaluations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new("invert", "Invert", Pos2::new(10.0, 20.0));
        assert_eq!(node.title, "Invert");
        assert_eq!(node.properties.len(), 1);
        assert_eq!(node.properties[NAME_PROPERTY].as_str(), Some("Invert"));
        assert!(node.inputs.is_empty());
        assert!(node.outputs.is_empty());
        assert!(node.processor().is_none());
    }

    #[test]
    fn test_pass_through_node_has_one_of_each() {
        let node = Node::pass_through(Pos2::ZERO);
        assert_eq!(node.inputs.len(), 1);
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.state(), NodeState::Stale);
    }

    #[test]
    fn test_port_ids_follow_insertion_order() {
        let mut node = Node::new("test", "Test Node", Pos2::ZERO);
        assert_eq!(node.add_input("A", false), 0);
        assert_eq!(node.add_input("B", false), 1);
        assert_eq!(node.add_output("Out"), 0);
        assert_eq!(node.inputs[1].name, "B");
        assert_eq!(node.property_index("Name"), Some(0));
    }
}
