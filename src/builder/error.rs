//! Build errors for state machine construction.

use crate::core::SlotError;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors that can occur when building a state machine.
///
/// Every problem in a definition is a configuration mistake; none of them is
/// retried. When a definition has several problems they are reported
/// together as [`BuildError::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(tag) before .build()")]
    MissingInitialState,

    #[error("No states registered. Add at least one state")]
    NoStates,

    #[error("Initial state '{state}' is not registered")]
    UnknownInitialState { state: String },

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("Invalid machine definition: {}", summarize(.0))]
    Invalid(Vec<BuildError>),
}

impl BuildError {
    /// Collapse accumulated problems: a single problem is reported as itself.
    pub(crate) fn from_violations(violations: NonEmptyVec<BuildError>) -> Self {
        let mut errors: Vec<BuildError> = violations.iter().cloned().collect();
        if errors.len() == 1 {
            if let Some(error) = errors.pop() {
                return error;
            }
        }
        BuildError::Invalid(errors)
    }

    /// Every individual problem this error stands for.
    pub fn problems(&self) -> Vec<&BuildError> {
        match self {
            BuildError::Invalid(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

fn summarize(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
