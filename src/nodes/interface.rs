//! Kernel-facing view of a node during processing

use std::sync::Arc;

use crate::nodes::pixel::{Color, PixelBuffer, SharedImage, BLACK};
use crate::nodes::property::{FileSource, Property};
use crate::nodes::NodeId;

/// Everything a kernel may read: the node's resolved input images and
/// its properties. Kernels never see the graph itself.
pub struct ProcessContext<'a> {
    pub node: NodeId,
    inputs: Vec<Option<SharedImage>>,
    properties: &'a [Property],
}

impl<'a> ProcessContext<'a> {
    pub fn new(node: NodeId, inputs: Vec<Option<SharedImage>>, properties: &'a [Property]) -> Self {
        Self {
            node,
            inputs,
            properties,
        }
    }

    /// Image on input `index`, if connected and computed
    pub fn input(&self, index: usize) -> Option<&PixelBuffer> {
        self.inputs.get(index).and_then(|i| i.as_deref())
    }

    /// Shared handle to input `index` for kernels that pass it through
    pub fn shared_input(&self, index: usize) -> Option<SharedImage> {
        self.inputs.get(index).cloned().flatten()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn property(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    pub fn integer(&self, index: usize) -> i32 {
        self.property(index)
            .and_then(Property::as_integer)
            .unwrap_or_default()
    }

    pub fn color(&self, index: usize) -> Color {
        self.property(index).and_then(Property::as_color).unwrap_or(BLACK)
    }

    pub fn choice(&self, index: usize) -> &str {
        self.property(index)
            .and_then(Property::as_str)
            .unwrap_or_default()
    }

    pub fn file(&self, index: usize) -> Option<&FileSource> {
        self.property(index).and_then(Property::as_file)
    }
}

/// Wrap a freshly computed buffer for an output socket
pub fn output(buffer: PixelBuffer) -> Option<SharedImage> {
    Some(Arc::new(buffer))
}
