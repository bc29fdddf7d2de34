//! File Out node implementation
//!
//! A sink with no outputs. Writing happens through
//! [`NodeGraph::save_file_out`](crate::nodes::NodeGraph::save_file_out),
//! which pulls the input up to date first.

use egui::Color32;

use crate::nodes::interface::ProcessContext;
use crate::nodes::pixel::SharedImage;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

/// Sink node whose input is saved as PNG on request
#[derive(Default)]
pub struct FileOutNodeFactory;

impl NodeFactory for FileOutNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "fileout",
            "File OUT",
            NodeCategory::io(),
            "Saves its input image as a PNG file",
        )
        .with_color(Color32::from_rgb(45, 75, 55))
        .with_inputs(vec![
            PortDefinition::required("Image").with_description("Image to save"),
        ])
        .with_tags(vec!["io", "save", "sink"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn process(_ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        vec![]
    }
}
