//! Scene-tree path lookup.
//!
//! Game code refers to nodes by dotted logical names (`Main.Toolbar.Slots`).
//! A [`SceneTreeService`] turns those into the host's absolute node paths.
//! [`ConfigSceneTree`] does so from a JSON description of the tree:
//!
//! ```json
//! {
//!   "root": {
//!     "type": "Node2D",
//!     "name": "Main",
//!     "children": {
//!       "Toolbar": { "type": "Control", "name": "ToolbarPanel" }
//!     }
//!   }
//! }
//! ```

use super::ServiceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub trait SceneTreeService {
    /// Resolve a dotted logical node path to an absolute node path.
    fn get_path(&self, node_path: &str) -> Result<String, ServiceError>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNodeConfig {
    #[serde(rename = "type", default)]
    pub node_type: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub children: HashMap<String, SceneNodeConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneTreeConfig {
    pub root: SceneNodeConfig,
}

/// Path resolver backed by a [`SceneTreeConfig`].
#[derive(Debug, Clone)]
pub struct ConfigSceneTree {
    config: SceneTreeConfig,
    base: String,
}

impl ConfigSceneTree {
    /// Absolute path of the scene root.
    pub const DEFAULT_BASE: &'static str = "/root/Main";

    pub fn new(config: SceneTreeConfig) -> Self {
        Self {
            config,
            base: Self::DEFAULT_BASE.to_string(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let config: SceneTreeConfig = serde_json::from_str(json)?;
        tracing::info!(root = %config.root.name, "Loaded scene tree configuration");
        Ok(Self::new(config))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ServiceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn config(&self) -> &SceneTreeConfig {
        &self.config
    }
}

impl SceneTreeService for ConfigSceneTree {
    /// The first segment names the root and is not checked; each following
    /// segment selects a child by key and contributes that child's `name`.
    fn get_path(&self, node_path: &str) -> Result<String, ServiceError> {
        let mut current = &self.config.root;
        let mut path = self.base.clone();

        for segment in node_path.split('.').skip(1) {
            current = current
                .children
                .get(segment)
                .ok_or_else(|| ServiceError::InvalidNodePath {
                    path: node_path.to_string(),
                })?;
            path.push('/');
            path.push_str(&current.name);
        }

        Ok(path)
    }
}
