//! Watermark node implementation

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ColorDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const X_OFFSET: usize = 1;
pub const Y_OFFSET: usize = 2;

/// Overlays a watermark at a position relative to the base size
#[derive(Default)]
pub struct WatermarkNodeFactory;

impl NodeFactory for WatermarkNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "watermark",
            "Watermark",
            NodeCategory::compositing(),
            "Overlays a watermark image on a base image",
        )
        .with_color(Color32::from_rgb(85, 50, 50))
        .with_inputs(vec![
            PortDefinition::required("Base"),
            PortDefinition::optional("Watermark").with_description("Without a watermark the base passes through"),
        ])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["compositing", "overlay"])
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer(
                "Horizontal Offset (%)",
                ColorDefaults::PERCENT_MIN,
                ColorDefaults::PERCENT_MAX,
                ColorDefaults::PERCENT_DEFAULT,
            ),
            Property::integer(
                "Vertical Offset (%)",
                ColorDefaults::PERCENT_MIN,
                ColorDefaults::PERCENT_MAX,
                ColorDefaults::PERCENT_DEFAULT,
            ),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let Some(base) = ctx.input(0) else {
            return vec![None];
        };
        let Some(mark) = ctx.input(1) else {
            return vec![ctx.shared_input(0)];
        };
        let x_pct = ctx.integer(X_OFFSET) as f32 / 100.0;
        let y_pct = ctx.integer(Y_OFFSET) as f32 / 100.0;
        vec![output(process_watermark(base, mark, x_pct, y_pct))]
    }
}
