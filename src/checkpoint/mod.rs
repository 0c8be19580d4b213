//! Checkpoint and restore for state machines.
//!
//! A checkpoint captures which state a machine is in and how it got there:
//! tags and history only. State instances are never serialized; restoring
//! re-points a machine that already holds the same slot set.

use crate::core::{LogicState, StateHistory, StateTag};
use crate::machine::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a machine's position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<T: StateTag> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the machine the checkpoint was taken from
    pub machine: String,

    /// Initial state of the machine
    pub initial_state: T,

    /// Current state of the machine
    pub current_state: T,

    /// Sequence number of the last transition taken
    pub sequence: u64,

    /// Retained transition history
    pub history: StateHistory<T>,
}

impl<T: StateTag> Checkpoint<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: LogicState> StateMachine<S> {
    /// Capture the machine's current position and history.
    pub fn checkpoint(&self) -> Checkpoint<S::Tag> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            machine: self.name.clone(),
            initial_state: self.initial,
            current_state: self.current_tag,
            sequence: self.sequence,
            history: self.history.clone(),
        }
    }

    /// Re-point this machine at the position recorded in `checkpoint`.
    ///
    /// No enter or exit hooks run: the restored state is treated as already
    /// entered, and the machine counts as started. The checkpoint must come
    /// from a machine with the same name and initial state, and its current
    /// state must be registered here.
    pub fn restore(&mut self, checkpoint: &Checkpoint<S::Tag>) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.machine != self.name {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint taken from machine '{}' cannot restore machine '{}'",
                checkpoint.machine, self.name
            )));
        }

        if checkpoint.initial_state != self.initial {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint initial state '{}' does not match machine initial state '{}'",
                checkpoint.initial_state.name(),
                self.initial.name()
            )));
        }

        let current = self.slots.get(checkpoint.current_state).map_err(|_| {
            CheckpointError::ValidationFailed(format!(
                "checkpoint state '{}' is not registered on machine '{}'",
                checkpoint.current_state.name(),
                self.name
            ))
        })?;
        let current = std::sync::Arc::clone(current);

        let mut history = checkpoint.history.clone();
        history.set_limit(self.history.limit());

        self.current = current;
        self.current_tag = checkpoint.current_state;
        self.sequence = checkpoint.sequence;
        self.history = history;
        self.started = true;

        tracing::info!(
            machine = %self.name,
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            "Restored state machine from checkpoint"
        );
        Ok(())
    }
}
