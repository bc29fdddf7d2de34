//! Node factory system with self-registration and rich metadata

use std::collections::BTreeMap;
use std::fmt;

use egui::{Color32, Pos2};
use log::debug;

use crate::nodes::interface::ProcessContext;
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{Node, NodeGraph, NodeId};

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for listings
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }
}

// Standard categories
impl NodeCategory {
    pub fn io() -> Self { Self::new(&["IO"]) }
    pub fn generate() -> Self { Self::new(&["Generate"]) }
    pub fn color() -> Self { Self::new(&["Color"]) }
    pub fn transform() -> Self { Self::new(&["Transform"]) }
    pub fn compositing() -> Self { Self::new(&["Compositing"]) }
    pub fn filter() -> Self { Self::new(&["Filter"]) }
    pub fn utility() -> Self { Self::new(&["Utility"]) }
}

/// Port definition for node creation
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// A port whose image must be present for the node to process
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            optional: false,
            description: None,
        }
    }

    /// A port the kernel can do without
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            optional: true,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// `Name (required): description` for listings
    pub fn listing(&self) -> String {
        let kind = if self.optional { "optional" } else { "required" };
        match &self.description {
            Some(description) => format!("{} ({}): {}", self.name, kind, description),
            None => format!("{} ({})", self.name, kind),
        }
    }
}

/// Processing cost hint, shown in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingCost {
    Minimal,
    Low,
    Medium,
    High,
}

impl fmt::Display for ProcessingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// Metadata for a node type: the single source of its identity and arity
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    /// Stable identifier written to graph files
    pub node_type: &'static str,
    /// Base name a new node is given
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: NodeCategory,
    pub color: Color32,
    pub tags: Vec<&'static str>,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
    pub processing_cost: ProcessingCost,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            category,
            color: Color32::from_rgb(100, 100, 100),
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
            processing_cost: ProcessingCost::Low,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_processing_cost(mut self, cost: ProcessingCost) -> Self {
        self.processing_cost = cost;
        self
    }

    /// One-line summary: type, name, arity, cost, tags and description
    pub fn listing(&self) -> String {
        format!(
            "{:<14} {:<16} {}in/{}out  cost: {:<7}  [{}]  {}",
            self.node_type,
            self.display_name,
            self.inputs.len(),
            self.outputs.len(),
            self.processing_cost,
            self.tags.join(", "),
            self.description
        )
    }

    /// One line per port, inputs first
    pub fn port_listing(&self) -> Vec<String> {
        let inputs = self.inputs.iter().map(|p| format!("in  {}", p.listing()));
        let outputs = self.outputs.iter().map(|p| format!("out {}", p.listing()));
        inputs.chain(outputs).collect()
    }
}

/// A node type: its metadata, its extra properties and its kernel
pub trait NodeFactory {
    /// Get comprehensive node metadata
    fn metadata() -> NodeMetadata where Self: Sized;

    /// Properties following the name property, in declared order
    fn properties() -> Vec<Property> where Self: Sized {
        vec![]
    }

    /// Compute every output from the node's inputs and properties
    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> where Self: Sized;

    /// Create a node instance at the given position
    fn create(position: Pos2) -> Node where Self: Sized {
        let meta = Self::metadata();
        let mut node = Node::new(meta.node_type, meta.display_name, position);
        node.color = meta.color;

        for input in &meta.inputs {
            node.add_input(&input.name, !input.optional);
        }
        for output in &meta.outputs {
            node.add_output(&output.name);
        }
        for property in Self::properties() {
            node.add_property(property);
        }
        node.set_processor(Self::process);
        node
    }

    /// Add this node to a graph
    fn add_to_graph(graph: &mut NodeGraph, position: Pos2) -> NodeId where Self: Sized {
        graph.add_node(Self::create(position))
    }
}

/// Function pointer type for creating nodes
type NodeCreator = fn(Pos2) -> Node;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry mapping type names to node constructors
pub struct NodeRegistry {
    creators: BTreeMap<String, NodeCreator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: BTreeMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();
        debug!("Registering node type '{}'", node_type);

        self.creators.insert(node_type.clone(), T::create);
        self.metadata_providers.insert(node_type.clone(), T::metadata);

        self.categories
            .entry(metadata.category.clone())
            .or_default()
            .push(node_type);
    }

    /// Create a node by type name
    pub fn create_node(&self, node_type: &str, position: Pos2) -> Option<Node> {
        self.creators.get(node_type).map(|creator| creator(position))
    }

    /// Create a node and add it to `graph`
    pub fn add_to_graph(&self, graph: &mut NodeGraph, node_type: &str, position: Pos2) -> Option<NodeId> {
        self.create_node(node_type, position)
            .map(|node| graph.add_node(node))
    }

    /// Get metadata for a node type
    pub fn get_metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.creators.contains_key(node_type)
    }

    /// Get all available node types, sorted
    pub fn node_types(&self) -> Vec<&str> {
        self.creators.keys().map(|s| s.as_str()).collect()
    }

    /// Get nodes in a specific category
    pub fn nodes_in_category(&self, category: &NodeCategory) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|nodes| nodes.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Get all categories
    pub fn categories(&self) -> Vec<&NodeCategory> {
        self.categories.keys().collect()
    }

    /// Best-effort reverse lookup from a display base name to a type name.
    /// Matching ignores case; graph files never rely on this.
    pub fn type_from_base_name(&self, base_name: &str) -> Option<&str> {
        self.metadata_providers
            .iter()
            .find(|(_, provider)| provider().display_name.eq_ignore_ascii_case(base_name))
            .map(|(node_type, _)| node_type.as_str())
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // File IO
        registry.register::<crate::nodes::io::file_in::FileInNodeFactory>();
        registry.register::<crate::nodes::io::file_out::FileOutNodeFactory>();

        // Generators
        registry.register::<crate::nodes::generate::rectangle::RectangleNodeFactory>();
        registry.register::<crate::nodes::generate::ellipse::EllipseNodeFactory>();

        // Color
        registry.register::<crate::nodes::color::invert::InvertNodeFactory>();
        registry.register::<crate::nodes::color::color_effects::ColorEffectsNodeFactory>();
        registry.register::<crate::nodes::color::opacity::OpacityNodeFactory>();
        registry.register::<crate::nodes::color::chroma_key::ChromaKeyNodeFactory>();
        registry.register::<crate::nodes::color::split_rgb::SplitRgbNodeFactory>();
        registry.register::<crate::nodes::color::join_rgb::JoinRgbNodeFactory>();

        // Transform
        registry.register::<crate::nodes::transform::crop::CropNodeFactory>();
        registry.register::<crate::nodes::transform::resize::ResizeNodeFactory>();
        registry.register::<crate::nodes::transform::flip::FlipNodeFactory>();
        registry.register::<crate::nodes::transform::rotate::RotateNodeFactory>();

        // Compositing
        registry.register::<crate::nodes::compositing::matte::MatteNodeFactory>();
        registry.register::<crate::nodes::compositing::composite::CompositeNodeFactory>();
        registry.register::<crate::nodes::compositing::watermark::WatermarkNodeFactory>();

        // Filters
        registry.register::<crate::nodes::filter::blur::BlurNodeFactory>();

        // Utility
        registry.register::<crate::nodes::utility::test::TestNodeFactory>();

        registry
    }
}
