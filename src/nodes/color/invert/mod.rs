//! Invert node implementation
//!
//! - mod.rs: node metadata and factory implementation
//! - functions.rs: core pixel kernel

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

/// Inverts every color channel, leaving alpha alone
#[derive(Default)]
pub struct InvertNodeFactory;

impl NodeFactory for InvertNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "invert",
            "Invert",
            NodeCategory::color(),
            "Inverts the color channels of an image",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![
            PortDefinition::required("Input").with_description("Image to invert"),
        ])
        .with_outputs(vec![
            PortDefinition::required("Output").with_description("Inverted image"),
        ])
        .with_tags(vec!["color", "negative"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        vec![ctx.input(0).map(process_invert).and_then(output)]
    }
}
