//! Traits describing state tags and the pre-allocated state instances they key.
//!
//! A machine is defined over two closely related things:
//!
//! - a **tag** (`StateTag`): a small `Copy` enum naming each alternative in the
//!   closed set of states the machine can ever occupy
//! - a **state instance** (`LogicState`): the value stored in the machine's
//!   slot table for a tag, constructed once and shared for the lifetime of
//!   the machine
//!
//! For machines whose states carry no data the instance type can simply be
//! the tag enum itself (`type Tag = Self`).

use super::output::{Outputs, Reaction};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier distinguishing one state alternative from another.
///
/// Tags are plain values: cheap to copy, hashable so they can key the slot
/// table, and serializable so they can be written into checkpoints.
///
/// # Example
///
/// ```rust
/// use logicblock::core::StateTag;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorTag {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl StateTag for DoorTag {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
///
/// assert_eq!(DoorTag::Open.name(), "Open");
/// assert!(DoorTag::Welded.is_final());
/// ```
pub trait StateTag:
    Copy
    + Eq
    + Hash
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// Get the tag's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// A machine sitting in a final state refuses transitions to any other
    /// state until it is reset.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// A state instance held in a machine's slot table.
///
/// Instances are built once when the machine is constructed and shared
/// through `Arc`, so every hook takes `&self`. Hooks emit outputs through the
/// supplied [`Outputs`] buffer; the machine delivers them to its bindings
/// once the hook returns.
pub trait LogicState: Debug + Send + Sync + 'static {
    /// Tag type naming the alternatives of this machine.
    type Tag: StateTag;

    /// Inputs the machine accepts.
    type Input;

    /// Outputs states may emit.
    type Output;

    /// The tag this instance is registered under.
    fn tag(&self) -> Self::Tag;

    /// Called when the machine enters this state, and once for the initial
    /// state when the machine starts.
    fn on_enter(&self, _outputs: &mut Outputs<Self::Output>) {}

    /// Called when the machine leaves this state.
    fn on_exit(&self, _outputs: &mut Outputs<Self::Output>) {}

    /// React to an input while this state is current.
    ///
    /// Unhandled inputs are ignored: the default stays put.
    fn on_input(
        &self,
        _input: &Self::Input,
        _outputs: &mut Outputs<Self::Output>,
    ) -> Reaction<Self::Tag> {
        Reaction::Stay
    }
}
