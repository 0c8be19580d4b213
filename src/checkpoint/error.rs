//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring checkpoints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or bincode failed
    #[error("Checkpoint serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or bincode failed
    #[error("Checkpoint deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint does not fit the machine it is restored onto
    #[error("Checkpoint does not match machine: {0}")]
    ValidationFailed(String),
}
