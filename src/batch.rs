//! Batch processing: run one graph over many input files
//!
//! The input files are fed one by one into a File In node, and each result
//! is written from a File Out node to `<output_dir>/<stem>_out.png`.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::constants;
use crate::error::{GraphError, GraphResult};
use crate::nodes::{NodeGraph, NodeId};

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in input order
    pub processed: Vec<PathBuf>,
    /// Inputs that failed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A batch job; every field must be set before [`run`](Self::run)
#[derive(Debug, Clone)]
pub struct BatchProcess {
    pub input_files: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub input_node: Option<NodeId>,
    pub output_node: Option<NodeId>,
    pub output_suffix: String,
}

impl Default for BatchProcess {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            output_dir: None,
            input_node: None,
            output_node: None,
            output_suffix: constants::OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl BatchProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_files(mut self, files: Vec<PathBuf>) -> Self {
        self.input_files = files;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_input_node(mut self, node: NodeId) -> Self {
        self.input_node = Some(node);
        self
    }

    pub fn with_output_node(mut self, node: NodeId) -> Self {
        self.output_node = Some(node);
        self
    }

    pub fn with_output_suffix(mut self, suffix: &str) -> Self {
        self.output_suffix = suffix.to_string();
        self
    }

    /// Where the result for `input` is written
    pub fn output_path(&self, output_dir: &Path, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        output_dir.join(format!(
            "{}{}.{}",
            stem,
            self.output_suffix,
            constants::OUTPUT_EXTENSION
        ))
    }

    /// Process every input file. A failing file is recorded in the report
    /// and the run moves on; an incomplete job processes nothing.
    pub fn run(&self, graph: &mut NodeGraph) -> GraphResult<BatchReport> {
        let (Some(output_dir), Some(input_node), Some(output_node)) =
            (&self.output_dir, self.input_node, self.output_node)
        else {
            return Err(GraphError::batch_incomplete(
                "input node, output node and output directory are required",
            ));
        };
        if self.input_files.is_empty() {
            return Err(GraphError::batch_incomplete("no input files"));
        }
        graph.require_node(input_node)?;
        graph.require_node(output_node)?;

        let mut report = BatchReport::default();
        for input in &self.input_files {
            let output = self.output_path(output_dir, input);
            let result = graph
                .load_file(input_node, input)
                .and_then(|_| graph.save_file_out(output_node, &output));
            match result {
                Ok(()) => report.processed.push(output),
                Err(err) => {
                    warn!("Batch: {} failed: {}", input.display(), err);
                    report.failures.push((input.clone(), err.to_string()));
                }
            }
        }

        info!(
            "Batch finished: {} written, {} failed",
            report.processed.len(),
            report.failures.len()
        );
        Ok(report)
    }
}
