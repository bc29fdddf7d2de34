//! Flip node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const MODE: usize = 1;

#[derive(Default)]
pub struct FlipNodeFactory;

impl NodeFactory for FlipNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "flip",
            "Flip",
            NodeCategory::transform(),
            "Mirrors an image horizontally, vertically or both",
        )
        .with_color(Color32::from_rgb(40, 65, 85))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["transform", "mirror"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![Property::choice("Mode", FlipMode::OPTIONS.to_vec())]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let mode = FlipMode::from_label(ctx.choice(MODE)).unwrap_or(FlipMode::Horizontal);
        vec![ctx.input(0).map(|img| process_flip(img, mode)).and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_flip_modes_are_choices() {
        let node = FlipNodeFactory::create(Pos2::ZERO);
        assert_eq!(node.properties[MODE].as_str(), Some("Horizontal"));
        for label in FlipMode::OPTIONS {
            assert!(FlipMode::from_label(label).is_some());
        }
    }
}
