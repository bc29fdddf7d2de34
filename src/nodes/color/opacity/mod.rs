//! Opacity node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ColorDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const OPACITY: usize = 1;

/// Scales the alpha channel
#[derive(Default)]
pub struct OpacityNodeFactory;

impl NodeFactory for OpacityNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "opacity",
            "Opacity",
            NodeCategory::color(),
            "Scales the opacity of an image",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["color", "alpha", "transparency"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![Property::integer(
            "Opacity (%)",
            ColorDefaults::PERCENT_MIN,
            ColorDefaults::PERCENT_MAX,
            ColorDefaults::PERCENT_DEFAULT,
        )]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let opacity = ctx.integer(OPACITY) as f32 / 100.0;
        vec![ctx
            .input(0)
            .map(|img| process_opacity(img, opacity))
            .and_then(output)]
    }
}
