//! Rotate node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const MODE: usize = 1;

/// Quarter-turn rotations
#[derive(Default)]
pub struct RotateNodeFactory;

impl NodeFactory for RotateNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "rotate",
            "Rotate",
            NodeCategory::transform(),
            "Rotates an image by 90 or 180 degrees",
        )
        .with_color(Color32::from_rgb(40, 65, 85))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["transform", "rotate"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![Property::choice("Mode", RotateMode::OPTIONS.to_vec())]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let mode = RotateMode::from_label(ctx.choice(MODE)).unwrap_or(RotateMode::Right90);
        vec![ctx.input(0).map(|img| process_rotate(img, mode)).and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::generate::rectangle::{self, RectangleNodeFactory};
    use crate::nodes::{NodeGraph, SocketRef};
    use egui::Pos2;

    #[test]
    fn test_quarter_turn_swaps_dimensions() {
        let mut graph = NodeGraph::new();
        let rect = RectangleNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let rotate = RotateNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        graph.connect(SocketRef::new(rect, 0), SocketRef::new(rotate, 0)).unwrap();
        graph.set_property_from_str(rect, rectangle::WIDTH, "40").unwrap();

        assert_eq!(graph.evaluate(rotate, 0).unwrap().unwrap().dimensions(), (100, 40));
        graph.set_property_from_str(rotate, MODE, "Rotate 180").unwrap();
        assert_eq!(graph.evaluate(rotate, 0).unwrap().unwrap().dimensions(), (40, 100));
    }
}
