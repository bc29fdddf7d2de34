//! Engine configuration
//!
//! Settings live in `~/.pixflow/config.json`. Every field has a default, so
//! a missing file or a partial one is fine.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{GraphError, GraphResult};
use crate::nodes::defaults::ImageDefaults;
use crate::nodes::NodeGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default `env_logger` filter; `RUST_LOG` wins when set
    pub log_level: String,
    /// Appended to the input stem when the batch runner names outputs
    pub output_suffix: String,
    /// Images loaded into a graph that are larger than this on either side
    /// are rejected (see `NodeGraph::set_max_image_dimension`)
    pub max_image_dimension: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_suffix: constants::OUTPUT_SUFFIX.to_string(),
            max_image_dimension: ImageDefaults::DIMENSION_MAX as u32,
        }
    }
}

impl EngineConfig {
    /// Standard location of the config file, if a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join(constants::config::CONFIG_DIR)
                .join(constants::config::CONFIG_FILE)
        })
    }

    /// Apply the settings that live on a graph
    pub fn apply_to(&self, graph: &mut NodeGraph) {
        graph.set_max_image_dimension(Some(self.max_image_dimension));
    }

    /// Load from the standard location, falling back to defaults
    pub fn load() -> GraphResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> GraphResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| GraphError::config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty JSON, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> GraphResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::config(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
