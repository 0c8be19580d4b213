//! Transition outcomes and errors.

use crate::core::StateTag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of feeding one input to a machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult<T: StateTag> {
    /// The machine moved to a different state
    Transitioned { from: T, to: T },

    /// The machine stayed in this state
    Stayed(T),
}

impl<T: StateTag> StepResult<T> {
    /// The state the machine is in after the step.
    pub fn state(&self) -> T {
        match self {
            Self::Transitioned { to, .. } => *to,
            Self::Stayed(state) => *state,
        }
    }
}

/// Errors that can occur during transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot transition to unregistered state '{state}'")]
    UnknownVariant { state: String },

    #[error("Guard blocked transition from '{from}' to '{to}'")]
    GuardBlocked { from: String, to: String },

    #[error("State '{state}' is final and cannot be left without a reset")]
    FinalState { state: String },

    #[error("Machine '{machine}' has not been started")]
    NotStarted { machine: String },
}

/// Handle returned by `StateMachine::bind`, used to remove the binding later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(Uuid);

impl BindingId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
