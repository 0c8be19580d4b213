//! Machine configuration.
//!
//! Every field has a default, so a config file only needs to mention what it
//! changes:
//!
//! ```json
//! { "name": "toolbar_block", "history_limit": 64 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// History bound applied when a config does not set one.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name used in logs and checkpoints
    pub name: String,

    /// Maximum number of retained history records; `null` keeps everything
    pub history_limit: Option<usize>,

    /// Start the machine implicitly on its first input or transition
    pub auto_start: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "logic_block".to_string(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            auto_start: true,
        }
    }
}

impl MachineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        tracing::debug!(path = ?path, name = %config.name, "Loaded machine config");
        Ok(config)
    }
}
