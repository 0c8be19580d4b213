//! Builder API for constructing state machines.
//!
//! Machines can be assembled ad hoc with [`StateMachineBuilder`] or declared
//! once as a [`LogicBlock`] type. Tag enums are usually declared with the
//! [`state_tags!`](crate::state_tags) macro.

pub mod error;
pub mod logic;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use logic::{declared_names, declared_tags, LogicBlock};
pub use machine::StateMachineBuilder;
