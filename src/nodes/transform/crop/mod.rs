//! Crop node implementation
//!
//! - mod.rs: node metadata, properties and factory implementation
//! - functions.rs: core kernel with bounds clamping

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ImageDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const X_OFFSET: usize = 1;
pub const Y_OFFSET: usize = 2;
pub const WIDTH: usize = 3;
pub const HEIGHT: usize = 4;

/// Cuts a rectangle out of an image
#[derive(Default)]
pub struct CropNodeFactory;

impl NodeFactory for CropNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "crop",
            "Crop",
            NodeCategory::transform(),
            "Crops an image to a rectangle, clamped to the image bounds",
        )
        .with_color(Color32::from_rgb(40, 65, 85))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["transform", "crop"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer("X Offset", 0, ImageDefaults::DIMENSION_MAX, 0),
            Property::integer("Y Offset", 0, ImageDefaults::DIMENSION_MAX, 0),
            Property::integer("Width", 0, ImageDefaults::DIMENSION_MAX, ImageDefaults::DIMENSION_DEFAULT),
            Property::integer("Height", 0, ImageDefaults::DIMENSION_MAX, ImageDefaults::DIMENSION_DEFAULT),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let region = CropRegion {
            x: ctx.integer(X_OFFSET).max(0) as u32,
            y: ctx.integer(Y_OFFSET).max(0) as u32,
            width: ctx.integer(WIDTH).max(0) as u32,
            height: ctx.integer(HEIGHT).max(0) as u32,
        };
        vec![ctx.input(0).and_then(|img| process_crop(img, region)).and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::generate::rectangle::RectangleNodeFactory;
    use crate::nodes::{NodeGraph, SocketRef};
    use egui::Pos2;

    #[test]
    fn test_crop_clamps_in_graph() {
        let mut graph = NodeGraph::new();
        let rect = RectangleNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let crop = CropNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        graph.connect(SocketRef::new(rect, 0), SocketRef::new(crop, 0)).unwrap();
        graph.set_property_from_str(crop, X_OFFSET, "90").unwrap();
        graph.set_property_from_str(crop, Y_OFFSET, "90").unwrap();
        graph.set_property_from_str(crop, WIDTH, "50").unwrap();
        graph.set_property_from_str(crop, HEIGHT, "50").unwrap();

        let image = graph.evaluate(crop, 0).unwrap().unwrap();
        assert_eq!(image.dimensions(), (10, 10));
    }
}
