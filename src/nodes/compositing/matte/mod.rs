//! Matte node implementation
//!
//! - mod.rs: node metadata and factory implementation
//! - functions.rs: luma matte kernel

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

/// Uses one image's brightness as another image's transparency
#[derive(Default)]
pub struct MatteNodeFactory;

impl NodeFactory for MatteNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "matte",
            "Matte",
            NodeCategory::compositing(),
            "Cuts out the base image using the brightness of a matte",
        )
        .with_color(Color32::from_rgb(85, 50, 50))
        .with_inputs(vec![
            PortDefinition::required("Matte").with_description("Bright areas become transparent"),
            PortDefinition::required("Base").with_description("Image supplying the color"),
        ])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["compositing", "mask", "luma"])
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let matted = match (ctx.input(0), ctx.input(1)) {
            (Some(matte), Some(base)) => Some(process_matte(matte, base)),
            _ => None,
        };
        vec![matted.and_then(output)]
    }
}
