//! Application-wide constants and default values
//!
//! Centralized location for hard-coded values shared by persistence, the
//! batch runner and the command line.

/// Extension of saved graph files
pub const GRAPH_EXTENSION: &str = "imgflow";

/// Batch output naming: `<stem><OUTPUT_SUFFIX>.<OUTPUT_EXTENSION>`
pub const OUTPUT_SUFFIX: &str = "_out";
pub const OUTPUT_EXTENSION: &str = "png";

/// Graph file format constants
pub mod format {
    /// Connection line written for an output socket with no peer
    pub const UNCONNECTED: &str = "-1 0";

    /// Separator between node records
    pub const RECORD_SEPARATOR: &str = "\n\n";
}

/// Configuration file location, relative to the home directory
pub mod config {
    pub const CONFIG_DIR: &str = ".pixflow";
    pub const CONFIG_FILE: &str = "config.json";
}
