//! Color effects node implementation
//!
//! - mod.rs: node metadata, properties and factory implementation
//! - functions.rs: core pixel kernel

mod functions;

pub use functions::*;

use egui::Color32;

use crate::nodes::defaults::ColorDefaults;
use crate::nodes::interface::{output, ProcessContext};
use crate::nodes::pixel::SharedImage;
use crate::nodes::property::Property;
use crate::nodes::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};

pub const HUE: usize = 1;
pub const SATURATION: usize = 2;
pub const BRIGHTNESS: usize = 3;

/// Hue shift plus saturation and brightness scaling in HSB space
#[derive(Default)]
pub struct ColorEffectsNodeFactory;

impl NodeFactory for ColorEffectsNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "coloreffects",
            "Color Effects",
            NodeCategory::color(),
            "Shifts hue and scales saturation and brightness",
        )
        .with_color(Color32::from_rgb(70, 55, 90))
        .with_inputs(vec![PortDefinition::required("Input")])
        .with_outputs(vec![PortDefinition::required("Output")])
        .with_tags(vec!["color", "hue", "saturation", "brightness"])
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::integer("Hue", 0, ColorDefaults::HUE_MAX, 0),
            Property::integer(
                "Saturation (%)",
                0,
                ColorDefaults::FACTOR_MAX,
                ColorDefaults::FACTOR_DEFAULT,
            ),
            Property::integer(
                "Brightness (%)",
                0,
                ColorDefaults::FACTOR_MAX,
                ColorDefaults::FACTOR_DEFAULT,
            ),
        ]
    }

    fn process(ctx: &ProcessContext) -> Vec<Option<SharedImage>> {
        let hue = ctx.integer(HUE) as f32;
        let saturation = ctx.integer(SATURATION) as f32 / 100.0;
        let brightness = ctx.integer(BRIGHTNESS) as f32 / 100.0;
        vec![ctx
            .input(0)
            .map(|img| process_color_effects(img, hue, saturation, brightness))
            .and_then(output)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_color_effects_defaults() {
        let node = ColorEffectsNodeFactory::create(Pos2::ZERO);
        assert_eq!(node.title, "Color Effects");
        assert_eq!(node.properties[HUE].as_integer(), Some(0));
        assert_eq!(node.properties[SATURATION].as_integer(), Some(100));
        assert_eq!(node.properties[BRIGHTNESS].as_integer(), Some(100));
    }
}
