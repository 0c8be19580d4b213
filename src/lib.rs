//! Logicblock: pre-allocated finite-state machines for game entities
//!
//! A logic block is a state machine whose every state is constructed once,
//! when the machine is built, and kept for the machine's whole lifetime.
//! Transitions swap which pre-built instance is current; they never build
//! new ones. State identity is therefore stable, and any one-time setup a
//! state performs happens exactly once.
//!
//! # Core Concepts
//!
//! - **Tags**: a closed enum naming every state, via the `StateTag` trait
//! - **Slots**: the table of pre-allocated instances keyed by tag
//! - **Machine**: exactly one current state, swapped by transitions or inputs
//! - **Definitions**: `LogicBlock` types that enumerate states and name the
//!   initial one
//!
//! # Example
//!
//! ```rust
//! use logicblock::logic::{FooInput, FooLogic, FooOutput, FooState};
//! use logicblock::machine::StateMachine;
//!
//! let mut machine = StateMachine::from_logic::<FooLogic>().unwrap();
//! assert_eq!(machine.current_tag(), machine.initial_state());
//!
//! machine.bind(|output: &FooOutput| {
//!     let FooOutput::StateChanged { state } = output;
//!     println!("entered {state}");
//! });
//!
//! machine.input(&FooInput::Toggle).unwrap();
//! assert_eq!(machine.current_tag(), FooState::Bar);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod logic;
pub mod machine;
pub mod services;

// Re-export commonly used types
pub use builder::{BuildError, LogicBlock, StateMachineBuilder};
pub use config::MachineConfig;
pub use self::core::{Guard, LogicState, Outputs, Reaction, StateSlots, StateTag};
pub use machine::{StateMachine, StepResult, TransitionError};
