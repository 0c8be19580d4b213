//! State transition history tracking.
//!
//! Records every completed transition with its timestamp and a monotonically
//! increasing sequence number. Histories may be bounded, in which case the
//! oldest records are dropped first.

use super::state::StateTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use logicblock::core::StateTransition;
/// use logicblock::logic::BlockState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: BlockState::Placed,
///     to: BlockState::Dragging,
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.to, BlockState::Dragging);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<T: StateTag> {
    /// The state being transitioned from
    pub from: T,
    /// The state being transitioned to
    pub to: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Position of this transition in the machine's lifetime, starting at 1
    pub sequence: u64,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use logicblock::core::{StateHistory, StateTransition};
/// use logicblock::logic::BlockState;
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: BlockState::InToolbar,
///     to: BlockState::Dragging,
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
/// history.record(StateTransition {
///     from: BlockState::Dragging,
///     to: BlockState::Placed,
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![BlockState::InToolbar, BlockState::Dragging, BlockState::Placed]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<T: StateTag> {
    transitions: VecDeque<StateTransition<T>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<T: StateTag> Default for StateHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StateTag> StateHistory<T> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// `None` keeps everything.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the bound, dropping the oldest records that no longer fit.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<T>) {
        self.transitions.push_back(transition);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<T> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the oldest and newest retained transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<T>> + '_ {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<T>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
