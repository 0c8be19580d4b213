//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the `(from, to)` tag pair of a
//! requested transition. A machine consults every guard it was built with;
//! a single rejection blocks the transition and leaves the machine as it was.

use super::state::StateTag;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use logicblock::core::Guard;
/// use logicblock::logic::InteractionState;
///
/// // Blocks may only leave the toolbar by being dragged out
/// let guard = Guard::new(|from, to| {
///     from != InteractionState::InToolbar || to == InteractionState::Dragging
/// });
///
/// assert!(guard.check(InteractionState::InToolbar, InteractionState::Dragging));
/// assert!(!guard.check(InteractionState::InToolbar, InteractionState::Placed));
/// ```
pub struct Guard<T: StateTag> {
    predicate: Box<dyn Fn(T, T) -> bool + Send + Sync>,
}

impl<T: StateTag> Guard<T> {
    /// Create a guard from a pure predicate over `(from, to)`.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(T, T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that rejects exactly one directed edge.
    pub fn forbid(from: T, to: T) -> Self {
        Self::new(move |f, t| !(f == from && t == to))
    }

    /// Guard that only admits transitions into `to` from one of `sources`.
    pub fn only_from(sources: Vec<T>, to: T) -> Self {
        Self::new(move |f, t| t != to || sources.contains(&f))
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, from: T, to: T) -> bool {
        (self.predicate)(from, to)
    }
}

impl<T: StateTag> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl StateTag for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn guard_allows_matching_edges() {
        let guard = Guard::new(|from, _to| matches!(from, TestState::Initial));

        assert!(guard.check(TestState::Initial, TestState::Processing));
        assert!(!guard.check(TestState::Processing, TestState::Complete));
    }

    #[test]
    fn forbid_rejects_only_that_edge() {
        let guard = Guard::forbid(TestState::Initial, TestState::Complete);

        assert!(!guard.check(TestState::Initial, TestState::Complete));
        assert!(guard.check(TestState::Initial, TestState::Processing));
        assert!(guard.check(TestState::Processing, TestState::Complete));
    }

    #[test]
    fn only_from_restricts_entry() {
        let guard = Guard::only_from(vec![TestState::Processing], TestState::Complete);

        assert!(guard.check(TestState::Processing, TestState::Complete));
        assert!(!guard.check(TestState::Initial, TestState::Complete));
        assert!(guard.check(TestState::Initial, TestState::Processing));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|from: TestState, to: TestState| from != to);

        let result1 = guard.check(TestState::Initial, TestState::Processing);
        let result2 = guard.check(TestState::Initial, TestState::Processing);

        assert_eq!(result1, result2);
    }
}
