//! Split RGB node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

/// Splits an image into three grayscale channel images
#[derive(Default)]
pub struct SplitRgbNodeFactory;

impl NodeFactory for SplitRgbNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "splitcolor",
            "Split RGB",
            NodeCategory::color(),
            "Splits an image into red, green and blue channel images",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![
            PortDefinition::required("Red"),
            PortDefinition::required("Green"),
            PortDefinition::required("Blue"),
        ])
        .with_tags(vec!["color", "channels"])
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        match ctx.input(0) {
            Some(img) => (0..3).map(|c| output(extract_channel(img, c))).collect(),
            None => vec![None; 3],
        }
    }
}
