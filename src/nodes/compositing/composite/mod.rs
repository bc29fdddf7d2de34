//! Composite node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::{ColorDefaults, ImageDefaults};
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const BLEND: usize = 1;
pub const X_OFFSET: usize = 2;
pub const Y_OFFSET: usize = 3;

/// Places one image over another
#[derive(Default)]
pub struct CompositeNodeFactory;

impl NodeFactory for CompositeNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "composite",
            "Composite",
            NodeCategory::compositing(),
            "Blends a top image over a bottom image at a pixel offset",
        )
        .with_color(Color32::from_rgb(85, 50, 50))
        .with_inputs(vec![
            PortDefinition::required("Top"),
            PortDefinition::required("Bottom").with_description("Sets the output size"),
        ])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["compositing", "blend", "over"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Medium)
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer(
                "Blend (%)",
                ColorDefaults::PERCENT_MIN,
                ColorDefaults::PERCENT_MAX,
                ColorDefaults::PERCENT_DEFAULT,
            ),
            Property::integer("X Offset", 0, ImageDefaults::DIMENSION_MAX, ImageDefaults::OFFSET_DEFAULT),
            Property::integer("Y Offset", 0, ImageDefaults::DIMENSION_MAX, ImageDefaults::OFFSET_DEFAULT),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let blend = ctx.integer(BLEND) as f32 / 100.0;
        let x = ctx.integer(X_OFFSET).max(0) as u32;
        let y = ctx.integer(Y_OFFSET).max(0) as u32;
        let composed = match (ctx.input(0), ctx.input(1)) {
            (Some(top), Some(bottom)) => Some(process_composite(top, bottom, blend, x, y)),
            _ => None,
        };
        vec![composed.and_then(output)]
    }
}
