//! The running state machine.
//!
//! # Key Concepts
//!
//! - **Pre-allocation**: every state instance is built once, at construction
//! - **Transitions**: swap the current pointer between existing instances
//! - **Inputs and outputs**: states react to inputs and emit outputs that
//!   bindings receive in order

#[allow(clippy::module_inception)]
mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::{BindingId, StepResult, TransitionError};
