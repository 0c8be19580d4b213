//! Core state machine types.
//!
//! This module contains the building blocks every machine is made of:
//! - Tags and state instances via the `StateTag` and `LogicState` traits
//! - The pre-allocated instance table (`StateSlots`)
//! - Guard predicates for transition control
//! - Transition history
//!
//! Nothing here owns a "current" state; that lives in [`crate::machine`].

mod guard;
mod history;
mod output;
mod slots;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use output::{Outputs, Reaction};
pub use slots::{SlotError, StateSlots};
pub use state::{LogicState, StateTag};
