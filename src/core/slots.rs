//! Pre-allocated state instance table.
//!
//! Every state a machine can occupy is constructed up front and stored here
//! under its tag. Transitions look instances up instead of building them, so
//! a tag always resolves to the same shared instance for as long as the
//! table lives.

use super::state::{LogicState, StateTag};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while registering or resolving state slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("State '{state}' is already registered")]
    DuplicateRegistration { state: String },

    #[error("State '{state}' was never registered")]
    UnknownVariant { state: String },

    #[error("Instance registered under '{expected}' reports tag '{found}'")]
    TagMismatch { expected: String, found: String },
}

/// Table mapping each registered tag to its single shared instance.
///
/// # Example
///
/// ```rust
/// use logicblock::core::StateSlots;
/// use logicblock::logic::BlockState;
/// use std::sync::Arc;
///
/// let mut slots = StateSlots::new();
/// slots.register(BlockState::Placed, BlockState::Placed).unwrap();
/// slots.register(BlockState::Dragging, BlockState::Dragging).unwrap();
///
/// let first = Arc::clone(slots.get(BlockState::Placed).unwrap());
/// let second = Arc::clone(slots.get(BlockState::Placed).unwrap());
/// assert!(Arc::ptr_eq(&first, &second));
///
/// assert!(slots.register(BlockState::Placed, BlockState::Placed).is_err());
/// assert!(slots.get(BlockState::InToolbar).is_err());
/// ```
#[derive(Debug)]
pub struct StateSlots<S: LogicState> {
    slots: HashMap<S::Tag, Arc<S>>,
}

impl<S: LogicState> StateSlots<S> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register a freshly constructed instance under `tag`.
    ///
    /// Each tag may be registered at most once, and the instance must report
    /// the same tag it is registered under.
    pub fn register(&mut self, tag: S::Tag, state: S) -> Result<(), SlotError> {
        let found = state.tag();
        if found != tag {
            return Err(SlotError::TagMismatch {
                expected: tag.name().to_string(),
                found: found.name().to_string(),
            });
        }

        match self.slots.entry(tag) {
            Entry::Occupied(_) => Err(SlotError::DuplicateRegistration {
                state: tag.name().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(state));
                Ok(())
            }
        }
    }

    /// Register an instance under the tag it reports.
    pub fn insert(&mut self, state: S) -> Result<(), SlotError> {
        let tag = state.tag();
        self.register(tag, state)
    }

    /// Resolve the shared instance for `tag`.
    pub fn get(&self, tag: S::Tag) -> Result<&Arc<S>, SlotError> {
        self.slots.get(&tag).ok_or_else(|| SlotError::UnknownVariant {
            state: tag.name().to_string(),
        })
    }

    pub fn contains(&self, tag: S::Tag) -> bool {
        self.slots.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = S::Tag> + '_ {
        self.slots.keys().copied()
    }
}

impl<S: LogicState> Default for StateSlots<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Warmup,
        Active,
        Cooldown,
    }

    impl StateTag for Phase {
        fn name(&self) -> &'static str {
            match self {
                Self::Warmup => "Warmup",
                Self::Active => "Active",
                Self::Cooldown => "Cooldown",
            }
        }
    }

    #[derive(Debug)]
    struct PhaseState {
        phase: Phase,
    }

    impl LogicState for PhaseState {
        type Tag = Phase;
        type Input = ();
        type Output = ();

        fn tag(&self) -> Phase {
            self.phase
        }
    }

    fn phase_state(phase: Phase) -> PhaseState {
        PhaseState { phase }
    }

    #[test]
    fn register_inserts_instance() {
        let mut slots = StateSlots::new();
        slots.register(Phase::Warmup, phase_state(Phase::Warmup)).unwrap();

        assert!(slots.contains(Phase::Warmup));
        assert!(!slots.contains(Phase::Active));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut slots = StateSlots::new();
        slots.register(Phase::Active, phase_state(Phase::Active)).unwrap();

        let result = slots.register(Phase::Active, phase_state(Phase::Active));
        assert_eq!(
            result,
            Err(SlotError::DuplicateRegistration {
                state: "Active".to_string()
            })
        );
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn duplicate_keeps_original_instance() {
        let mut slots = StateSlots::new();
        slots.insert(phase_state(Phase::Active)).unwrap();
        let original = Arc::clone(slots.get(Phase::Active).unwrap());

        let _ = slots.insert(phase_state(Phase::Active));

        assert!(Arc::ptr_eq(&original, slots.get(Phase::Active).unwrap()));
    }

    #[test]
    fn mismatched_tag_is_rejected() {
        let mut slots = StateSlots::new();
        let result = slots.register(Phase::Warmup, phase_state(Phase::Cooldown));

        assert!(matches!(result, Err(SlotError::TagMismatch { .. })));
        assert!(slots.is_empty());
    }

    #[test]
    fn unknown_tag_lookup_fails() {
        let mut slots = StateSlots::new();
        slots.insert(phase_state(Phase::Warmup)).unwrap();

        let result = slots.get(Phase::Cooldown);
        assert!(matches!(result, Err(SlotError::UnknownVariant { state }) if state == "Cooldown"));
    }

    #[test]
    fn lookups_share_identity() {
        let mut slots = StateSlots::new();
        slots.insert(phase_state(Phase::Warmup)).unwrap();

        let a = slots.get(Phase::Warmup).unwrap();
        let b = slots.get(Phase::Warmup).unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn tags_lists_every_registration() {
        let mut slots = StateSlots::new();
        slots.insert(phase_state(Phase::Warmup)).unwrap();
        slots.insert(phase_state(Phase::Cooldown)).unwrap();

        let mut tags: Vec<&str> = slots.tags().map(|t| t.name()).collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!["Cooldown", "Warmup"]);
    }
}
