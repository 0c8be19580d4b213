//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Guard, LogicState, StateSlots, StateTag};
use crate::machine::StateMachine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<BuildError>>;

/// Builder for constructing state machines with a fluent API.
///
/// Registrations are only checked in [`build`](Self::build), which reports
/// every problem in the definition at once rather than stopping at the
/// first.
///
/// # Example
///
/// ```rust
/// use logicblock::builder::StateMachineBuilder;
/// use logicblock::logic::BlockState;
///
/// let machine = StateMachineBuilder::new()
///     .state(BlockState::Placed)
///     .state(BlockState::Dragging)
///     .state(BlockState::InToolbar)
///     .initial(BlockState::Placed)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_tag(), BlockState::Placed);
/// ```
pub struct StateMachineBuilder<S: LogicState> {
    config: MachineConfig,
    registrations: Vec<(S::Tag, S)>,
    initial: Option<S::Tag>,
    guards: Vec<Guard<S::Tag>>,
}

impl<S: LogicState> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
            registrations: Vec::new(),
            initial: None,
            guards: Vec::new(),
        }
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a state under an explicit tag.
    pub fn register(mut self, tag: S::Tag, state: S) -> Self {
        self.registrations.push((tag, state));
        self
    }

    /// Register a state under the tag it reports.
    pub fn state(self, state: S) -> Self {
        let tag = state.tag();
        self.register(tag, state)
    }

    /// Register several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.registrations
            .extend(states.into_iter().map(|state| (state.tag(), state)));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, tag: S::Tag) -> Self {
        self.initial = Some(tag);
        self
    }

    pub fn guard(mut self, guard: Guard<S::Tag>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard using a closure over `(from, to)`.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(S::Tag, S::Tag) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    pub fn guards(mut self, guards: impl IntoIterator<Item = Guard<S::Tag>>) -> Self {
        self.guards.extend(guards);
        self
    }

    /// Build the state machine.
    ///
    /// Fails if no states were registered, a tag was registered twice, an
    /// instance was registered under a tag it does not report, or the
    /// initial state is missing or unregistered.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let mut checks: Vec<Check> = Vec::new();

        if self.registrations.is_empty() {
            checks.push(Validation::fail(BuildError::NoStates));
        }

        let mut slots = StateSlots::new();
        for (tag, state) in self.registrations {
            let check = match slots.register(tag, state) {
                Ok(()) => Validation::success(()),
                Err(err) => Validation::fail(BuildError::Slot(err)),
            };
            checks.push(check);
        }

        let initial_check = match self.initial {
            None => Validation::fail(BuildError::MissingInitialState),
            Some(tag) if !slots.is_empty() && !slots.contains(tag) => {
                Validation::fail(BuildError::UnknownInitialState {
                    state: tag.name().to_string(),
                })
            }
            Some(_) => Validation::success(()),
        };
        checks.push(initial_check);

        if let Validation::Failure(violations) = Validation::all_vec(checks).map(|_| ()) {
            let err = BuildError::from_violations(violations);
            tracing::warn!(
                machine = %self.config.name,
                error = %err,
                "Rejected machine definition"
            );
            return Err(err);
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        StateMachine::assemble(self.config, slots, initial, self.guards)
    }
}

impl<S: LogicState> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
