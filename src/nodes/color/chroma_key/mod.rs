//! Chroma key node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ColorDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::{SharedImage, LIME};
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const KEY_COLOR: usize = 1;
pub const THRESHOLD: usize = 2;

/// Makes pixels close to a key color transparent
#[derive(Default)]
pub struct ChromaKeyNodeFactory;

impl NodeFactory for ChromaKeyNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "chromakey",
            "Chroma Key",
            NodeCategory::color(),
            "Removes pixels that match a key color",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![
            PortDefinition::required("Output").with_description("Image with keyed pixels cleared"),
        ])
        .with_tags(vec!["color", "green screen", "alpha"])
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::color("Key Color", LIME),
            Property::integer(
                "Threshold (%)",
                ColorDefaults::PERCENT_MIN,
                ColorDefaults::PERCENT_MAX,
                ColorDefaults::THRESHOLD_DEFAULT,
            ),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let key = ctx.color(KEY_COLOR);
        let threshold = ctx.integer(THRESHOLD) as f32 / 100.0;
        vec![ctx
            .input(0)
            .map(|img| process_chroma_key(img, key, threshold))
            .and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_chroma_key_defaults() {
        let node = ChromaKeyNodeFactory::create(Pos2::ZERO);
        assert_eq!(node.properties[KEY_COLOR].as_color(), Some(LIME));
        assert_eq!(node.properties[THRESHOLD].as_integer(), Some(10));
    }
}
