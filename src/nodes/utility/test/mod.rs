//! Test node module - exercises optional sockets plus integer and choice properties

use egui::Color32;

use crate::nodes::interface::ProcessContext;
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const INPUTS: usize = 3;
pub const OUTPUTS: usize = 5;

/// Node with several optional inputs and dummy properties
#[derive(Default)]
pub struct TestNodeFactory;

impl NodeFactory for TestNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "test",
            "Test Node",
            NodeCategory::utility(),
            "Echoes its inputs; used to exercise the graph machinery",
        )
        .with_color(Color32::from_rgb(255, 100, 100))
        .with_inputs(
            (0..INPUTS)
                .map(|i| PortDefinition::optional(&format!("In {}", i + 1)))
                .collect(),
        )
        .with_outputs(
            (0..OUTPUTS)
                .map(|i| PortDefinition::optional(&format!("Out {}", i + 1)))
                .collect(),
        )
        .with_tags(vec!["utility", "test", "debugging"])
        .with_processing_cost(crate::nodes::factory::ProcessingCost::Minimal)
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer("Dummy Slider 1", 0, 10, 0),
            Property::integer("Dummy Slider 2", 0, 100, 0),
            Property::integer("Dummy Spinner", 0, 100, 50),
            Property::choice("Dummy Mode", vec!["A", "B", "C"]),
        ]
    }

    /// Output `i` repeats input `i mod 3`
    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        (0..OUTPUTS).map(|i| ctx.shared_input(i % INPUTS)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::generate::rectangle::RectangleNodeFactory;
    use crate::nodes::{NodeGraph, PropertyKind, SocketRef};
    use egui::Pos2;

    #[test]
    fn test_node_metadata() {
        let metadata = TestNodeFactory::metadata();
        assert_eq!(metadata.node_type, "test");
        assert_eq!(metadata.inputs.len(), 3);
        assert_eq!(metadata.outputs.len(), 5);
        assert!(metadata.inputs.iter().all(|p| p.optional));

        let kinds: Vec<PropertyKind> = TestNodeFactory::properties()
            .into_iter()
            .map(|p| p.kind)
            .collect();
        assert!(matches!(
            kinds.as_slice(),
            [
                PropertyKind::Integer { .. },
                PropertyKind::Integer { .. },
                PropertyKind::Integer { .. },
                PropertyKind::Choice { .. },
            ]
        ));
    }

    #[test]
    fn test_outputs_echo_inputs() {
        let mut graph = NodeGraph::new();
        let rect = RectangleNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let test = TestNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        graph.connect(SocketRef::new(rect, 0), SocketRef::new(test, 1)).unwrap();
        graph.update(test).unwrap();

        let present: Vec<bool> = (0..OUTPUTS)
            .map(|i| graph.output_image(test, i).is_some())
            .collect();
        assert_eq!(present, vec![false, true, false, false, true]);
    }
}
