//! Line-oriented graph file format
//!
//! A file is a sequence of node records separated by a blank line:
//!
//! ```text
//! <uid>
//! <type name>
//! <custom name>
//! <x>
//! <y>
//! <uid> <input index>     one line per output socket, "-1 0" if unconnected
//! <property value>        one line per property after the name
//! ```
//!
//! A record's line count follows from its type, so empty names and empty
//! text properties read back correctly.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use egui::Pos2;
use log::{debug, info};

use crate::constants::format::{RECORD_SEPARATOR, UNCONNECTED};
use crate::error::{GraphError, GraphResult};
use crate::nodes::{Node, NodeGraph, NodeId, NodeRegistry, SocketRef, NAME_PROPERTY};

/// Serializes a graph. Nodes get uids `0..n` in graph order.
pub fn write_graph(graph: &NodeGraph) -> String {
    let uids: HashMap<NodeId, usize> = graph
        .node_ids()
        .into_iter()
        .enumerate()
        .map(|(uid, id)| (id, uid))
        .collect();

    let records: Vec<String> = graph
        .nodes()
        .map(|node| {
            let mut lines = vec![
                uids[&node.id].to_string(),
                node.type_name.to_string(),
                node.name().to_string(),
                node.position.x.to_string(),
                node.position.y.to_string(),
            ];
            for output in &node.outputs {
                let peer = output
                    .connection
                    .and_then(|to| uids.get(&to.node).map(|uid| (uid, to.port)));
                lines.push(match peer {
                    Some((uid, port)) => format!("{} {}", uid, port),
                    None => UNCONNECTED.to_string(),
                });
            }
            lines.extend(node.properties.iter().skip(1).map(|p| p.serialize_value()));
            lines.join("\n")
        })
        .collect();

    let mut text = records.join(RECORD_SEPARATOR);
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Output connections of one record, applied once every node exists
struct PendingLinks {
    uid: NodeId,
    /// `(line, output port, target uid, target input)`
    links: Vec<(usize, usize, NodeId, usize)>,
}

/// Cursor over the file's lines with 1-based line numbers for errors
struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    fn line_number(&self) -> usize {
        self.pos + 1
    }

    fn skip_blank(&mut self) {
        while self.lines.get(self.pos).is_some_and(|l| l.trim().is_empty()) {
            self.pos += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn next(&mut self, what: &str) -> GraphResult<(usize, &'a str)> {
        let line = self.line_number();
        let text = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or_else(|| GraphError::parse(line, format!("expected {}, found end of file", what)))?;
        self.pos += 1;
        Ok((line, text))
    }

    fn next_number<T: std::str::FromStr>(&mut self, what: &str) -> GraphResult<(usize, T)>
    where
        T::Err: std::fmt::Display,
    {
        let (line, text) = self.next(what)?;
        let value = text
            .trim()
            .parse::<T>()
            .map_err(|e| GraphError::parse(line, format!("bad {} '{}': {}", what, text, e)))?;
        Ok((line, value))
    }
}

/// Parses a graph. Any failure aborts the whole load.
pub fn read_graph(text: &str, registry: &NodeRegistry) -> GraphResult<NodeGraph> {
    let mut lines = Lines::new(text);
    let mut nodes: BTreeMap<NodeId, Node> = BTreeMap::new();
    let mut pending = Vec::new();

    // Pass 1: instantiate nodes and properties
    loop {
        lines.skip_blank();
        if lines.at_end() {
            break;
        }
        let (uid_line, uid) = lines.next_number::<NodeId>("uid")?;
        if nodes.contains_key(&uid) {
            return Err(GraphError::parse(uid_line, format!("duplicate uid {}", uid)));
        }
        let (_, type_name) = lines.next("type name")?;
        let type_name = type_name.trim();
        let (_, name) = lines.next("node name")?;
        let (_, x) = lines.next_number::<f32>("x position")?;
        let (_, y) = lines.next_number::<f32>("y position")?;

        let mut node = registry
            .create_node(type_name, Pos2::new(x, y))
            .ok_or_else(|| GraphError::UnknownNodeType(type_name.to_string()))?;
        node.properties[NAME_PROPERTY]
            .set_from_str(name)
            .map_err(|e| GraphError::parse(uid_line + 2, e.to_string()))?;
        node.title = name.to_string();

        let mut links = Vec::new();
        for port in 0..node.outputs.len() {
            let (line, text) = lines.next("connection")?;
            let mut parts = text.split_whitespace();
            let (Some(target), Some(input), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(GraphError::parse(line, format!("bad connection '{}'", text)));
            };
            let target: i64 = target
                .parse()
                .map_err(|e| GraphError::parse(line, format!("bad connection uid '{}': {}", target, e)))?;
            let input: i64 = input
                .parse()
                .map_err(|e| GraphError::parse(line, format!("bad connection socket '{}': {}", input, e)))?;
            if target < 0 {
                continue;
            }
            if input < 0 {
                return Err(GraphError::parse(line, format!("bad connection socket {}", input)));
            }
            links.push((line, port, target as NodeId, input as usize));
        }

        for index in 1..node.properties.len() {
            let (line, text) = lines.next("property value")?;
            node.properties[index]
                .set_from_str(text)
                .map_err(|e| GraphError::parse(line, e.to_string()))?;
        }

        debug!("Read node {} ({})", uid, type_name);
        nodes.insert(uid, node);
        pending.push(PendingLinks { uid, links });
    }

    let mut graph = NodeGraph::new();
    for (uid, node) in nodes {
        graph.add_node_with_id(uid, node)?;
    }

    // Pass 2: wire sockets by uid
    for record in pending {
        for (line, port, target, input) in record.links {
            if !graph.contains(target) {
                return Err(GraphError::parse(line, format!("connection to unknown uid {}", target)));
            }
            graph
                .connect(SocketRef::new(record.uid, port), SocketRef::new(target, input))
                .map_err(|e| GraphError::parse(line, e.to_string()))?;
        }
    }

    Ok(graph)
}

/// Writes a graph file
pub fn save_graph(graph: &NodeGraph, path: &Path) -> GraphResult<()> {
    std::fs::write(path, write_graph(graph))?;
    info!("Saved {} nodes to {}", graph.len(), path.display());
    Ok(())
}

/// Reads a graph file
pub fn load_graph(path: &Path, registry: &NodeRegistry) -> GraphResult<NodeGraph> {
    let text = std::fs::read_to_string(path)?;
    let graph = read_graph(&text, registry)?;
    info!("Loaded {} nodes from {}", graph.len(), path.display());
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::color::opacity::OPACITY;
    use crate::nodes::generate::rectangle::{COLOR, WIDTH};
    use crate::nodes::pixel::parse_color;
    use crate::nodes::property::PropertyValue;
    use crate::nodes::Connection;

    fn add(graph: &mut NodeGraph, registry: &NodeRegistry, node_type: &str, x: f32) -> NodeId {
        registry
            .add_to_graph(graph, node_type, Pos2::new(x, x / 2.0))
            .unwrap()
    }

    /// rectangle -> invert -> composite(top), ellipse -> composite(bottom)
    /// composite -> opacity -> fileout, plus an idle flip
    fn sample_graph(registry: &NodeRegistry) -> NodeGraph {
        let mut graph = NodeGraph::new();
        let rect = add(&mut graph, registry, "rectangle", 10.0);
        let invert = add(&mut graph, registry, "invert", 20.5);
        let ellipse = add(&mut graph, registry, "ellipse", 30.0);
        let composite = add(&mut graph, registry, "composite", 40.0);
        let opacity = add(&mut graph, registry, "opacity", 50.0);
        let out = add(&mut graph, registry, "fileout", 60.0);
        add(&mut graph, registry, "flip", -5.25);

        graph.connect(SocketRef::new(rect, 0), SocketRef::new(invert, 0)).unwrap();
        graph.connect(SocketRef::new(invert, 0), SocketRef::new(composite, 0)).unwrap();
        graph.connect(SocketRef::new(ellipse, 0), SocketRef::new(composite, 1)).unwrap();
        graph.connect(SocketRef::new(composite, 0), SocketRef::new(opacity, 0)).unwrap();
        graph.connect(SocketRef::new(opacity, 0), SocketRef::new(out, 0)).unwrap();

        graph.set_property_from_str(rect, COLOR, "rgba(255, 0, 128, 0.5)").unwrap();
        graph.set_property(rect, WIDTH, PropertyValue::Integer(42)).unwrap();
        graph.set_property(opacity, OPACITY, PropertyValue::Integer(35)).unwrap();
        graph.set_node_name(invert, "Negative").unwrap();
        graph
    }

    #[test]
    fn test_round_trip_preserves_graph() {
        let registry = NodeRegistry::default();
        let graph = sample_graph(&registry);
        let text = write_graph(&graph);
        let loaded = read_graph(&text, &registry).unwrap();

        assert_eq!(loaded.len(), graph.len());
        assert_eq!(loaded.connections(), graph.connections());
        for (a, b) in graph.nodes().zip(loaded.nodes()) {
            assert_eq!(a.type_name, b.type_name);
            assert_eq!(a.title, b.title);
            assert_eq!(a.position, b.position);
            let values_a: Vec<String> = a.properties.iter().map(|p| p.serialize_value()).collect();
            let values_b: Vec<String> = b.properties.iter().map(|p| p.serialize_value()).collect();
            assert_eq!(values_a, values_b);
        }
        assert_eq!(write_graph(&loaded), text);
        assert_eq!(loaded.node(1).unwrap().title, "Negative");
        assert_eq!(
            loaded.node(0).unwrap().properties[COLOR].as_color(),
            parse_color("rgba(255, 0, 128, 0.5)")
        );
    }

    #[test]
    fn test_forward_references_load() {
        let registry = NodeRegistry::default();
        // Downstream node is written first and refers to a later uid
        let mut graph = NodeGraph::new();
        let invert = add(&mut graph, &registry, "invert", 0.0);
        let rect = add(&mut graph, &registry, "rectangle", 0.0);
        graph.connect(SocketRef::new(rect, 0), SocketRef::new(invert, 0)).unwrap();

        let loaded = read_graph(&write_graph(&graph), &registry).unwrap();
        assert_eq!(loaded.connections(), vec![Connection::new(1, 0, 0, 0)]);
        assert_eq!(loaded.node(0).unwrap().type_name, "invert");
    }

    #[test]
    fn test_empty_name_survives() {
        let registry = NodeRegistry::default();
        let mut graph = NodeGraph::new();
        let rect = add(&mut graph, &registry, "rectangle", 0.0);
        add(&mut graph, &registry, "invert", 0.0);
        graph.set_node_name(rect, "").unwrap();

        let loaded = read_graph(&write_graph(&graph), &registry).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.node(0).unwrap().title, "");
    }

    #[test]
    fn test_carriage_return_in_name_is_rejected() {
        let registry = NodeRegistry::default();
        let mut graph = NodeGraph::new();
        let rect = add(&mut graph, &registry, "rectangle", 0.0);
        assert!(graph.set_node_name(rect, "Shape\r").is_err());

        let loaded = read_graph(&write_graph(&graph), &registry).unwrap();
        assert_eq!(loaded.node(0).unwrap().title, "Rectangle");
    }

    #[test]
    fn test_empty_text_is_empty_graph() {
        let registry = NodeRegistry::default();
        assert_eq!(write_graph(&NodeGraph::new()), "");
        assert!(read_graph("", &registry).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_aborts() {
        let registry = NodeRegistry::default();
        let text = "0\nsharpen\nSharpen\n0\n0\n-1 0\n";
        assert!(matches!(
            read_graph(text, &registry),
            Err(GraphError::UnknownNodeType(name)) if name == "sharpen"
        ));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let registry = NodeRegistry::default();
        let text = "0\ninvert\nInvert\nleft\n0\n-1 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_missing_lines_abort() {
        let registry = NodeRegistry::default();
        let text = "0\nopacity\nOpacity\n0\n0\n-1 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 7, .. })));
    }

    #[test]
    fn test_dangling_uid_aborts() {
        let registry = NodeRegistry::default();
        let text = "0\ninvert\nInvert\n0\n0\n9 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 6, .. })));
    }

    #[test]
    fn test_bad_socket_index_aborts() {
        let registry = NodeRegistry::default();
        let text = "0\ninvert\nInvert\n0\n0\n1 3\n\n1\ninvert\nInvert\n0\n0\n-1 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 6, .. })));
    }

    #[test]
    fn test_cycle_in_file_aborts() {
        let registry = NodeRegistry::default();
        let text = "0\ninvert\nA\n0\n0\n1 0\n\n1\ninvert\nB\n0\n0\n0 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 13, .. })));
    }

    #[test]
    fn test_invalid_property_aborts() {
        let registry = NodeRegistry::default();
        let text = "0\nopacity\nOpacity\n0\n0\n-1 0\nlots\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 7, .. })));
    }

    #[test]
    fn test_duplicate_uid_aborts() {
        let registry = NodeRegistry::default();
        let text = "3\ninvert\nA\n0\n0\n-1 0\n\n3\ninvert\nB\n0\n0\n-1 0\n";
        assert!(matches!(read_graph(text, &registry), Err(GraphError::Parse { line: 8, .. })));
    }

    #[test]
    fn test_save_and_load_file() {
        let registry = NodeRegistry::default();
        let graph = sample_graph(&registry);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.imgflow");
        save_graph(&graph, &path).unwrap();
        let loaded = load_graph(&path, &registry).unwrap();
        assert_eq!(write_graph(&loaded), write_graph(&graph));
    }
}
