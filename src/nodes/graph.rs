//! Node graph data structures and operations
//!
//! Nodes live in an arena keyed by [`NodeId`]. Wiring is not stored
//! separately: it is the set of socket connections, and every edit goes
//! through [`NodeGraph::connect`] or one of the disconnect calls so both
//! ends of a connection always agree.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use log::{debug, warn};

use super::hooks::GraphHooks;
use super::node::{Node, NodeId};
use super::port::{PortId, SocketRef};
use crate::error::{GraphError, GraphResult};

/// A link from an output socket to an input socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: PortId,
    pub to_node: NodeId,
    pub to_port: PortId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_node: NodeId, from_port: PortId, to_node: NodeId, to_port: PortId) -> Self {
        Self {
            from_node,
            from_port,
            to_node,
            to_port,
        }
    }

    pub fn from_socket(&self) -> SocketRef {
        SocketRef::new(self.from_node, self.from_port)
    }

    pub fn to_socket(&self) -> SocketRef {
        SocketRef::new(self.to_node, self.to_port)
    }
}

/// A graph of image nodes plus the current selection
pub struct NodeGraph {
    nodes: BTreeMap<NodeId, Node>,
    next_node_id: NodeId,
    selected: Option<NodeId>,
    hooks: Vec<Box<dyn GraphHooks>>,
    /// Largest width or height [`load_file`](Self::load_file) accepts
    max_image_dimension: Option<u32>,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_node_id: 0,
            selected: None,
            hooks: Vec::new(),
            max_image_dimension: None,
        }
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        node.clear_connections();
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Adds a node to the graph with a specific ID, replacing nothing
    pub fn add_node_with_id(&mut self, id: NodeId, mut node: Node) -> GraphResult<NodeId> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::invalid_property(format!("node id {} is already in use", id)));
        }
        node.id = id;
        node.clear_connections();
        self.nodes.insert(id, node);
        if id >= self.next_node_id {
            self.next_node_id = id + 1;
        }
        Ok(id)
    }

    /// Disconnects and removes a node, clearing the selection if it was selected
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(&node_id) {
            return None;
        }
        self.disconnect_all_sockets(node_id);
        if self.selected == Some(node_id) {
            self.select_node(None);
        }
        debug!("Removed node {}", node_id);
        self.nodes.remove(&node_id)
    }

    /// Removes every node
    pub fn clear(&mut self) {
        let ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        for id in ids {
            self.remove_node(id);
        }
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    pub(crate) fn require_node(&self, node_id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&node_id).ok_or(GraphError::MissingNode(node_id))
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_position(&mut self, node_id: NodeId, position: egui::Pos2) -> GraphResult<()> {
        let node = self.node_mut(node_id).ok_or(GraphError::MissingNode(node_id))?;
        node.position = position;
        Ok(())
    }

    fn check_output(&self, socket: SocketRef) -> GraphResult<()> {
        let node = self.require_node(socket.node)?;
        if socket.port >= node.outputs.len() {
            return Err(GraphError::InvalidSocket { node: socket.node, port: socket.port });
        }
        Ok(())
    }

    fn check_input(&self, socket: SocketRef) -> GraphResult<()> {
        let node = self.require_node(socket.node)?;
        if socket.port >= node.inputs.len() {
            return Err(GraphError::InvalidSocket { node: socket.node, port: socket.port });
        }
        Ok(())
    }

    /// Connects an output socket to an input socket.
    ///
    /// Both sockets drop any previous peer first. The edge is rejected
    /// before anything changes if it joins a node to itself or closes a
    /// cycle. On success the downstream node is notified of its new input.
    pub fn connect(&mut self, from: SocketRef, to: SocketRef) -> GraphResult<()> {
        self.check_output(from)?;
        self.check_input(to)?;
        if from.node == to.node {
            warn!("Rejected connection {} -> {}: same node", from, to);
            return Err(GraphError::SelfConnection);
        }
        if self.output_peer(from) == Some(to) {
            return Ok(());
        }
        if !self.is_connection_safe(from, to) {
            warn!("Rejected connection {} -> {}: would create a cycle", from, to);
            return Err(GraphError::Cycle { from: from.node, to: to.node });
        }

        self.disconnect_output(from)?;
        self.disconnect_input(to)?;

        if let Some(node) = self.nodes.get_mut(&from.node) {
            node.outputs[from.port].connection = Some(to);
        }
        if let Some(node) = self.nodes.get_mut(&to.node) {
            node.inputs[to.port].connection = Some(from);
        }
        debug!("Connected {} -> {}", from, to);

        self.on_input_update(to.node);
        Ok(())
    }

    /// Breaks the connection on an input socket; a no-op if already free
    pub fn disconnect_input(&mut self, to: SocketRef) -> GraphResult<()> {
        self.check_input(to)?;
        let peer = self
            .nodes
            .get_mut(&to.node)
            .and_then(|node| node.inputs[to.port].connection.take());
        let Some(from) = peer else {
            return Ok(());
        };
        if let Some(output) = self
            .nodes
            .get_mut(&from.node)
            .and_then(|node| node.outputs.get_mut(from.port))
        {
            if output.connection == Some(to) {
                output.connection = None;
            }
        }
        debug!("Disconnected {} -> {}", from, to);
        self.on_input_update(to.node);
        Ok(())
    }

    /// Breaks the connection on an output socket; a no-op if already free
    pub fn disconnect_output(&mut self, from: SocketRef) -> GraphResult<()> {
        self.check_output(from)?;
        match self.output_peer(from) {
            Some(to) => self.disconnect_input(to),
            None => Ok(()),
        }
    }

    /// Breaks every connection on a node, leaving peers consistently free
    pub fn disconnect_all_sockets(&mut self, node_id: NodeId) {
        let Some(node) = self.nodes.get(&node_id) else {
            return;
        };
        let inputs = node.inputs.len();
        let outputs = node.outputs.len();
        for port in 0..inputs {
            let _ = self.disconnect_input(SocketRef::new(node_id, port));
        }
        for port in 0..outputs {
            let _ = self.disconnect_output(SocketRef::new(node_id, port));
        }
    }

    /// The input an output socket feeds, if any
    pub fn output_peer(&self, from: SocketRef) -> Option<SocketRef> {
        self.nodes
            .get(&from.node)
            .and_then(|node| node.outputs.get(from.port))
            .and_then(|output| output.connection)
    }

    /// The output an input socket reads from, if any
    pub fn input_peer(&self, to: SocketRef) -> Option<SocketRef> {
        self.nodes
            .get(&to.node)
            .and_then(|node| node.inputs.get(to.port))
            .and_then(|input| input.connection)
    }

    /// Whether linking `from` (an output) to `to` (an input) keeps the graph
    /// acyclic. Searches downstream of the input's node for the output's
    /// node, visiting each node at most once.
    pub fn is_connection_safe(&self, from: SocketRef, to: SocketRef) -> bool {
        let upstream = from.node;
        if to.node == upstream {
            return false;
        }
        let mut visited = HashSet::new();
        let mut stack = vec![to.node];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            for output in &node.outputs {
                if let Some(peer) = output.connection {
                    if peer.node == upstream {
                        return false;
                    }
                    stack.push(peer.node);
                }
            }
        }
        true
    }

    /// Every connection in the graph, ordered by source socket
    pub fn connections(&self) -> Vec<Connection> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.outputs.iter().filter_map(move |output| {
                    output.connection.map(|to| Connection::new(node.id, output.id, to.node, to.port))
                })
            })
            .collect()
    }

    /// Changes the selected node and notifies listeners.
    ///
    /// Selecting the current selection again does nothing, and so does
    /// selecting a node that is not part of this graph.
    pub fn select_node(&mut self, node_id: Option<NodeId>) -> bool {
        if let Some(id) = node_id {
            if !self.nodes.contains_key(&id) {
                debug!("Ignoring selection of node {} outside the graph", id);
                return false;
            }
        }
        if self.selected == node_id {
            return false;
        }
        self.selected = node_id;
        for hooks in &mut self.hooks {
            hooks.on_selection_changed(node_id);
        }
        true
    }

    pub fn selected_node(&self) -> Option<NodeId> {
        self.selected
    }

    /// Registers a listener for selection and preview events
    pub fn add_hooks(&mut self, hooks: Box<dyn GraphHooks>) {
        self.hooks.push(hooks);
    }

    /// Limit the size of images loaded into file properties; `None` lifts it
    pub fn set_max_image_dimension(&mut self, limit: Option<u32>) {
        self.max_image_dimension = limit;
    }

    pub fn max_image_dimension(&self) -> Option<u32> {
        self.max_image_dimension
    }

    pub(crate) fn notify_preview(&mut self, node_id: NodeId) {
        for hooks in &mut self.hooks {
            hooks.on_preview_refresh(node_id);
        }
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NodeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeGraph")
            .field("nodes", &self.nodes)
            .field("next_node_id", &self.next_node_id)
            .field("selected", &self.selected)
            .field("hooks", &self.hooks.len())
            .field("max_image_dimension", &self.max_image_dimension)
            .finish()
    }
}
