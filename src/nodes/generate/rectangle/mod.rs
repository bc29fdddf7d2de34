//! Rectangle node implementation

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

/// Solid rectangle generator
#[derive(Default)]
pub struct RectangleNodeFactory;

impl NodeFactory for RectangleNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "rectangle",
            "Rectangle",
            NodeCategory::generate(),
            "Generates a solid filled rectangle",
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
        vec![generate_rectangle(width, height, ctx.color(COLOR)).and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeGraph;
    use egui::Pos2;

    #[test]
    fn test_rectangle_defaults() {
        let mut graph = NodeGraph::new();
        let id = RectangleNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let image = graph.evaluate(id, 0).unwrap().unwrap();
        assert_eq!(image.dimensions(), (100, 100));
        assert_eq!(*image.get_pixel(50, 50), BLACK);
    }

    #[test]
    fn test_zero_width_rectangle_is_absent() {
        let mut graph = NodeGraph::new();
        let id = RectangleNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        graph.set_property_from_str(id, WIDTH, "0").unwrap();
        assert!(graph.evaluate(id, 0).unwrap().is_none());
    }
}
