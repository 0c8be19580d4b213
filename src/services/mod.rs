//! Collaborator services consumed by game logic.
//!
//! These are capability traits: the host supplies implementations and game
//! code receives them as explicit parameters. Only [`ConfigSceneTree`] is
//! implemented here, since it is pure data lookup.

pub mod input;
pub mod scene_tree;
pub mod tokens;

pub use input::{
    InputEvent, InputManager, Key, KeyEvent, MouseButton, MouseButtonEvent, MouseMotionEvent,
    Vector2,
};
pub use scene_tree::{ConfigSceneTree, SceneNodeConfig, SceneTreeConfig, SceneTreeService};
pub use tokens::TokenManager;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid node path: {path}")]
    InvalidNodePath { path: String },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene tree configuration: {0}")]
    Config(#[from] serde_json::Error),
}
