//! Blur node implementation
//!
//! - mod.rs: node metadata, properties and factory implementation
//! - functions.rs: separable gaussian kernel

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::FilterDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const RADIUS: usize = 1;

/// Gaussian blur with edge clamping
#[derive(Default)]
pub struct BlurNodeFactory;

impl NodeFactory for BlurNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "blur",
            "Blur",
            NodeCategory::filter(),
            "Softens an image with a gaussian blur",
        )
        .with_color(Color32::from_rgb(50, 80, 80))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["filter", "gaussian", "soften"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::High)
    }

    fn properties() -> Vec<Property> {
        vec![Property::integer(
            "Radius",
            0,
            FilterDefaults::BLUR_RADIUS_MAX,
            FilterDefaults::BLUR_RADIUS_DEFAULT,
        )]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let radius = ctx.integer(RADIUS).max(0) as u32;
        if radius == 0 {
            return vec![ctx.shared_input(0)];
        }
        vec![ctx.input(0).map(|img| process_blur(img, radius)).and_then(output)]
    }
}
