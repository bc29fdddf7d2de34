//! Resize node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ImageDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const WIDTH: usize = 1;
pub const HEIGHT: usize = 2;

/// Nearest-neighbour resampling to a fixed size
#[derive(Default)]
pub struct ResizeNodeFactory;

impl NodeFactory for ResizeNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "resize",
            "Resize",
            NodeCategory::transform(),
            "Resizes an image with nearest-neighbour sampling",
        )
        .with_color(Color32::from_rgb(40, 65, 85))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["transform", "scale"])
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer("Width", 1, ImageDefaults::DIMENSION_MAX, ImageDefaults::DIMENSION_DEFAULT),
            Property::integer("Height", 1, ImageDefaults::DIMENSION_MAX, ImageDefaults::DIMENSION_DEFAULT),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let width = ctx.integer(WIDTH).max(1) as u32;
        let height = ctx.integer(HEIGHT).max(1) as u32;
        vec![ctx
            .input(0)
            .and_then(|img| process_resize(img, width, height))
            .and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_resize_minimum_is_one() {
        let node = ResizeNodeFactory::create(Pos2::ZERO);
        let mut width = node.properties[WIDTH].clone();
        width.set_from_str("0").unwrap();
        assert_eq!(width.as_integer(), Some(1));
    }
}
