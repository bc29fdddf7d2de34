//! Join RGB node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

/// Rebuilds a color image from three channel images
#[derive(Default)]
pub struct JoinRgbNodeFactory;

impl NodeFactory for JoinRgbNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "joincolor",
            "Join RGB",
            NodeCategory::color(),
            "Joins red, green and blue channel images into one image",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![
            PortDefinition::required("Red").with_description("Brightness becomes the red channel"),
            PortDefinition::required("Green").with_description("Brightness becomes the green channel"),
            PortDefinition::required("Blue").with_description("Brightness becomes the blue channel"),
        ])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["color", "channels"])
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let joined = match (ctx.input(0), ctx.input(1), ctx.input(2)) {
            (Some(r), Some(g), Some(b)) => Some(join_channels(r, g, b)),
            _ => None,
        };
        vec![joined.and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::color::split_rgb::SplitRgbNodeFactory;
    use crate::nodes::io::file_in::FileInNodeFactory;
    use crate::nodes::pixel::{self, PixelBuffer};
    use crate::nodes::{NodeGraph, SocketRef};
    use egui::Pos2;
    use image::Rgba;

    #[test]
    fn test_split_then_join_restores_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let source = PixelBuffer::from_fn(4, 3, |x, y| {
            Rgba([x as f32 / 3.0, y as f32 / 2.0, 0.25, 1.0])
        });
        pixel::save_png(&source, &path).unwrap();

        let mut graph = NodeGraph::new();
        let file_in = FileInNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let split = SplitRgbNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        let join = JoinRgbNodeFactory::add_to_graph(&mut graph, Pos2::ZERO);
        graph.connect(SocketRef::new(file_in, 0), SocketRef::new(split, 0)).unwrap();
        for port in 0..3 {
            graph
                .connect(SocketRef::new(split, port), SocketRef::new(join, port))
                .unwrap();
        }
        graph.load_file(file_in, &path).unwrap();

        let joined = graph.evaluate(join, 0).unwrap().unwrap();
        let original = graph.output_image(file_in, 0).unwrap();
        assert_eq!(joined.dimensions(), original.dimensions());
        for (a, b) in joined.pixels().zip(original.pixels()) {
            assert_eq!(a.0[..3], b.0[..3]);
            assert!((a.0[3] - b.0[3]).abs() < 1e-6);
        }
    }
}
