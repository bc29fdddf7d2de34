//! Ellipse node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ImageDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::{SharedImage, BLACK};
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const COLOR: usize = 1;
pub const WIDTH: usize = 2;
pub const HEIGHT: usize = 3;

#[derive(Default)]
pub struct EllipseNodeFactory;

impl NodeFactory for EllipseNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "ellipse",
            "Ellipse",
            NodeCategory::generate(),
            "Generates a filled ellipse on a transparent background",
        )
        .with_color(Color32::from_rgb(80, 65, 40))
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["generate", "shape"])
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::color("Color", BLACK),
            Property::integer(
                "Width",
                0,
                ImageDefaults::SHAPE_DIMENSION_MAX,
                ImageDefaults::SHAPE_DIMENSION_DEFAULT,
            ),
            Property::integer(
                "Height",
                0,
                ImageDefaults::SHAPE_DIMENSION_MAX,
                ImageDefaults::SHAPE_DIMENSION_DEFAULT,
            ),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let width = ctx.integer(WIDTH).max(0) as u32;
        let height = ctx.integer(HEIGHT).max(0) as u32;
        vec![generate_ellipse(width, height, ctx.color(COLOR)).and_then(output)]
    }
}
