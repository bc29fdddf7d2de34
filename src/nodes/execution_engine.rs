//! Node graph execution engine
//!
//! Evaluation is pull-based. Edits only mark outputs stale, walking
//! downstream until they meet an output that is already stale. Reading a
//! node through [`NodeGraph::update`] recomputes exactly the stale part of
//! its upstream cone, once, and leaves everything else alone.

use std::path::Path;

use log::{debug, info, warn};

use crate::error::{GraphError, GraphResult};
use crate::nodes::interface::ProcessContext;
use crate::nodes::node::{NodeState, NAME_PROPERTY};
use crate::nodes::pixel::{self, SharedImage};
use crate::nodes::property::{FileSource, PropertyKind, PropertyValue};
use crate::nodes::{NodeGraph, NodeId, PortId, SocketRef};

/// Snapshot of graph evaluation state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    pub total_nodes: usize,
    pub fresh_nodes: usize,
    pub stale_nodes: usize,
    pub connections: usize,
    /// Kernel runs summed over all nodes
    pub evaluations: u64,
}

impl NodeGraph {
    /// Brings a node's outputs up to date.
    ///
    /// Every input first pulls its upstream node if that output is stale.
    /// A node whose outputs are all fresh is then left untouched; otherwise
    /// its kernel runs and every output is marked fresh.
    pub fn update(&mut self, node_id: NodeId) -> GraphResult<()> {
        let input_count = self.require_node(node_id)?.inputs.len();
        for port in 0..input_count {
            self.request_update(SocketRef::new(node_id, port))?;
        }

        let node = self.require_node(node_id)?;
        if !node.outputs.is_empty() && node.outputs.iter().all(|o| !o.needs_update) {
            return Ok(());
        }

        self.process_node(node_id);
        if let Some(node) = self.node_mut(node_id) {
            for output in &mut node.outputs {
                output.needs_update = false;
            }
        }
        Ok(())
    }

    /// Updates the node feeding input `to` if its output is stale
    pub fn request_update(&mut self, to: SocketRef) -> GraphResult<()> {
        let Some(from) = self.input_peer(to) else {
            return Ok(());
        };
        let stale = self
            .node(from.node)
            .and_then(|n| n.outputs.get(from.port))
            .map(|o| o.needs_update)
            .unwrap_or(false);
        if stale {
            self.update(from.node)?;
        }
        Ok(())
    }

    /// Runs the node's kernel, or clears its outputs when a required input
    /// has no image.
    fn process_node(&mut self, node_id: NodeId) {
        let Some(node) = self.node(node_id) else {
            return;
        };
        let inputs: Vec<Option<SharedImage>> = node
            .inputs
            .iter()
            .map(|input| input.connection.and_then(|from| self.output_image(from.node, from.port)))
            .collect();
        let missing_required = node
            .inputs
            .iter()
            .zip(&inputs)
            .any(|(socket, image)| socket.required && image.is_none());

        let (results, ran) = if missing_required {
            debug!("Node {} ({}) is missing a required input", node_id, node.type_name);
            (Some(vec![None; node.outputs.len()]), false)
        } else if let Some(processor) = node.processor() {
            let ctx = ProcessContext::new(node_id, inputs, &node.properties);
            (Some(processor(&ctx)), true)
        } else {
            (None, false)
        };

        let Some(node) = self.node_mut(node_id) else {
            return;
        };
        if ran {
            node.record_evaluation();
            debug!("Evaluated node {} ({})", node_id, node.type_name);
        }
        if let Some(mut results) = results {
            results.resize(node.outputs.len(), None);
            for (output, image) in node.outputs.iter_mut().zip(results) {
                output.image = image;
            }
        }
    }

    /// Marks every output of `node_id` stale and carries that downstream,
    /// stopping at outputs that were already stale.
    pub fn propagate_update(&mut self, node_id: NodeId) {
        let mut pending = vec![node_id];
        while let Some(current) = pending.pop() {
            let Some(node) = self.node_mut(current) else {
                continue;
            };
            for output in &mut node.outputs {
                if output.needs_update {
                    continue;
                }
                output.needs_update = true;
                if let Some(peer) = output.connection {
                    pending.push(peer.node);
                }
            }
        }
    }

    /// Reaction to an input being connected, disconnected or changed upstream
    pub fn on_input_update(&mut self, node_id: NodeId) {
        self.propagate_update(node_id);
    }

    /// Reaction to a property edit.
    ///
    /// The name property only renames. Anything else invalidates the node
    /// and everything downstream; the selected node is recomputed at once
    /// and its preview refreshed.
    pub fn on_property_update(&mut self, node_id: NodeId, index: usize) -> GraphResult<()> {
        let node = self.node_mut(node_id).ok_or(GraphError::MissingNode(node_id))?;
        if index == NAME_PROPERTY {
            if let Some(name) = node.properties.get(NAME_PROPERTY).and_then(|p| p.as_str()) {
                node.title = name.to_string();
            }
            return Ok(());
        }

        self.propagate_update(node_id);
        if self.selected_node() == Some(node_id) {
            self.update(node_id)?;
            self.notify_preview(node_id);
        }
        Ok(())
    }

    /// Sets a property value and reacts to the change. A rejected value
    /// leaves the property and the graph untouched.
    pub fn set_property(&mut self, node_id: NodeId, index: usize, value: PropertyValue) -> GraphResult<()> {
        let node = self.node_mut(node_id).ok_or(GraphError::MissingNode(node_id))?;
        let property = node.properties.get_mut(index).ok_or_else(|| {
            GraphError::invalid_property(format!("node {} has no property {}", node_id, index))
        })?;
        if let Err(err) = property.set_value(value) {
            warn!("Rejected value for '{}' on node {}: {}", property.name, node_id, err);
            return Err(err);
        }
        self.on_property_update(node_id, index)
    }

    /// Text form of [`set_property`](Self::set_property)
    pub fn set_property_from_str(&mut self, node_id: NodeId, index: usize, text: &str) -> GraphResult<()> {
        let node = self.require_node(node_id)?;
        let property = node.properties.get(index).ok_or_else(|| {
            GraphError::invalid_property(format!("node {} has no property {}", node_id, index))
        })?;
        let value = match property.parse_value(text) {
            Ok(value) => value,
            Err(err) => {
                warn!("Rejected text '{}' for '{}' on node {}: {}", text, property.name, node_id, err);
                return Err(err);
            }
        };
        self.set_property(node_id, index, value)
    }

    /// Renames a node
    pub fn set_node_name(&mut self, node_id: NodeId, name: &str) -> GraphResult<()> {
        self.set_property(node_id, NAME_PROPERTY, PropertyValue::Text(name.to_string()))
    }

    /// Cached image on an output, without recomputing
    pub fn output_image(&self, node_id: NodeId, port: PortId) -> Option<SharedImage> {
        self.node(node_id)
            .and_then(|node| node.outputs.get(port))
            .and_then(|output| output.image.clone())
    }

    /// Cached image arriving at an input, without recomputing
    pub fn input_image(&self, node_id: NodeId, port: PortId) -> Option<SharedImage> {
        self.input_peer(SocketRef::new(node_id, port))
            .and_then(|from| self.output_image(from.node, from.port))
    }

    /// Updates a node and returns the image on one of its outputs
    pub fn evaluate(&mut self, node_id: NodeId, port: PortId) -> GraphResult<Option<SharedImage>> {
        self.update(node_id)?;
        Ok(self.output_image(node_id, port))
    }

    pub fn node_state(&self, node_id: NodeId) -> Option<NodeState> {
        self.node(node_id).map(|node| node.state())
    }

    /// Loads an image file into a node's file property.
    ///
    /// The property always takes the new path so a later retry sees it.
    /// A decode failure, or an image beyond the graph's size limit, leaves
    /// the node without an image and is returned.
    pub fn load_file(&mut self, node_id: NodeId, path: &Path) -> GraphResult<()> {
        let node = self.require_node(node_id)?;
        let index = node
            .properties
            .iter()
            .position(|p| p.kind == PropertyKind::File)
            .ok_or_else(|| {
                GraphError::invalid_property(format!("node {} has no file property", node_id))
            })?;

        let (mut source, mut failure) = FileSource::open(path);
        let size = source.image.as_ref().map(|image| image.dimensions());
        if let (Some(limit), Some((width, height))) = (self.max_image_dimension(), size) {
            if width > limit || height > limit {
                warn!(
                    "Rejected {}: {}x{} exceeds the {} pixel limit",
                    path.display(),
                    width,
                    height,
                    limit
                );
                source.image = None;
                failure = Some(GraphError::ImageTooLarge { width, height, limit });
            }
        }
        self.set_property(node_id, index, PropertyValue::File(source))?;
        match failure {
            Some(err) => Err(err),
            None => {
                info!("Loaded {} into node {}", path.display(), node_id);
                Ok(())
            }
        }
    }

    /// Pulls input 0 of an output node up to date and writes it as PNG
    pub fn save_file_out(&mut self, node_id: NodeId, path: &Path) -> GraphResult<()> {
        let node = self.require_node(node_id)?;
        if node.inputs.is_empty() {
            return Err(GraphError::InvalidSocket { node: node_id, port: 0 });
        }
        self.update(node_id)?;
        let image = self
            .input_image(node_id, 0)
            .ok_or(GraphError::MissingImage(node_id))?;
        pixel::save_png(&image, path)?;
        info!(
            "Saved {}x{} image from node {} to {}",
            image.width(),
            image.height(),
            node_id,
            path.display()
        );
        Ok(())
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> ExecutionStats {
        let mut stats = ExecutionStats {
            total_nodes: self.len(),
            connections: self.connections().len(),
            ..Default::default()
        };
        for node in self.nodes() {
            match node.state() {
                NodeState::Fresh => stats.fresh_nodes += 1,
                NodeState::Stale => stats.stale_nodes += 1,
            }
            stats.evaluations += node.evaluations();
        }
        stats
    }
}
