//! File management for graph documents
//!
//! Tracks which file the current graph belongs to and whether it has been
//! edited since the last save.

use std::path::{Path, PathBuf};

use crate::error::{GraphError, GraphResult};
use crate::nodes::{NodeGraph, NodeRegistry};

use super::format::{load_graph, save_graph};

/// Manages file state for one open graph
pub struct FileManager {
    /// Current file path (None if unsaved/new file)
    current_file_path: Option<PathBuf>,
    /// Whether the graph has been modified since last save
    is_modified: bool,
}

impl FileManager {
    /// Create a new file manager
    pub fn new() -> Self {
        Self {
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn current_file_path(&self) -> Option<&PathBuf> {
        self.current_file_path.as_ref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.is_modified
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// File name for titles and listings, with `*` when modified
    pub fn get_file_display_name(&self) -> String {
        let name = match &self.current_file_path {
            Some(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Unknown")
                .to_string(),
            None => "Untitled".to_string(),
        };
        if self.is_modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Forget the current file
    pub fn new_file(&mut self) {
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// Save `graph` to `file_path`, which becomes the current file
    pub fn save_to_file(&mut self, file_path: &Path, graph: &NodeGraph) -> GraphResult<()> {
        save_graph(graph, file_path)?;
        self.current_file_path = Some(file_path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load a graph; on failure the current file is left as it was
    pub fn load_from_file(&mut self, file_path: &Path, registry: &NodeRegistry) -> GraphResult<NodeGraph> {
        let graph = load_graph(file_path, registry)?;
        self.current_file_path = Some(file_path.to_path_buf());
        self.is_modified = false;
        Ok(graph)
    }

    /// Save to the current file
    pub fn save_file(&mut self, graph: &NodeGraph) -> GraphResult<()> {
        match self.current_file_path.clone() {
            Some(path) => self.save_to_file(&path, graph),
            None => Err(GraphError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no file path set, save to an explicit path first",
            ))),
        }
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}
