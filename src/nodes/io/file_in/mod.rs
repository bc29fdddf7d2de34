//! File In node implementation
//!
//! The node holds a file property; loading goes through
//! [`NodeGraph::load_file`](crate::nodes::NodeGraph::load_file) so a new
//! file invalidates everything downstream.

use egui::Color32;

use crate::nodes::interface::ProcessContext;
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const FILE: usize = 1;

/// Source node emitting an image loaded from disk
#[derive(Default)]
pub struct FileInNodeFactory;

impl NodeFactory for FileInNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "filein",
            "File IN",
            NodeCategory::io(),
            "Loads an image file from disk",
        )
        .with_color(Color32::from_rgb(45, 75, 55))
        .with_outputs(vec![
            PortDefinition::required("Image").with_description("Decoded image, absent if loading failed"),
        ])
        .with_tags(vec!["io", "load", "source"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![Property::file("File")]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        vec![ctx.file(FILE).and_then(|source| source.image.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeGraph;
    use egui::Pos2;

    #[test]
    fn test_file_in_metadata() {
        let metadata = FileInNodeFactory::metadata();
        assert_eq!(metadata.node_type, "filein");
        assert!(metadata.inputs.is_empty());
        assert_eq!(metadata.outputs.len(), 1);
    }

    #[test]
    fn test_unloaded_file_in_is_absent() {
        let mut graph = NodeGraph::new();
        let id = FileInNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        assert!(graph.evaluate(id, 0).unwrap().is_none());
        assert_eq!(graph.node(id).unwrap().properties[FILE].serialize_value(), "null");
    }
}
