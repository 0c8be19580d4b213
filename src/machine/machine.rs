//! The pre-allocated state machine.

use crate::builder::{BuildError, LogicBlock, StateMachineBuilder};
use crate::config::MachineConfig;
use crate::core::{
    Guard, LogicState, Outputs, Reaction, StateHistory, StateSlots, StateTag, StateTransition,
};
use crate::machine::transition::{BindingId, StepResult, TransitionError};
use chrono::Utc;
use std::sync::Arc;

type Binding<O> = Box<dyn FnMut(&O) + Send>;

/// State machine over a fixed, pre-allocated set of state instances.
///
/// Exactly one state is current at all times: construction places the
/// machine in its initial state, and every transition swaps the current
/// pointer to an instance that already lives in the slot table. No state is
/// ever built or dropped while the machine is alive.
///
/// The machine is driven by a single owner. Every mutating method takes
/// `&mut self`; sharing one across threads needs an external lock.
pub struct StateMachine<S: LogicState> {
    pub(crate) name: String,
    pub(crate) slots: StateSlots<S>,
    pub(crate) initial: S::Tag,
    pub(crate) current_tag: S::Tag,
    pub(crate) current: Arc<S>,
    pub(crate) guards: Vec<Guard<S::Tag>>,
    pub(crate) history: StateHistory<S::Tag>,
    pub(crate) sequence: u64,
    pub(crate) started: bool,
    auto_start: bool,
    outputs: Outputs<S::Output>,
    bindings: Vec<(BindingId, Binding<S::Output>)>,
}

impl<S: LogicState> StateMachine<S> {
    /// Create a machine over already-populated slots.
    ///
    /// Fails if `initial` was never registered.
    pub fn new(slots: StateSlots<S>, initial: S::Tag) -> Result<Self, BuildError> {
        Self::assemble(MachineConfig::default(), slots, initial, Vec::new())
    }

    /// Build the machine described by a [`LogicBlock`] definition.
    pub fn from_logic<L>() -> Result<Self, BuildError>
    where
        L: LogicBlock<State = S>,
    {
        StateMachineBuilder::new()
            .config(L::config())
            .states(L::states())
            .initial(L::initial_state())
            .guards(L::guards())
            .build()
    }

    pub(crate) fn assemble(
        config: MachineConfig,
        slots: StateSlots<S>,
        initial: S::Tag,
        guards: Vec<Guard<S::Tag>>,
    ) -> Result<Self, BuildError> {
        let current = match slots.get(initial) {
            Ok(state) => Arc::clone(state),
            Err(_) => {
                return Err(BuildError::UnknownInitialState {
                    state: initial.name().to_string(),
                })
            }
        };

        tracing::debug!(
            machine = %config.name,
            states = slots.len(),
            initial = initial.name(),
            "Constructed state machine"
        );

        Ok(Self {
            name: config.name,
            slots,
            initial,
            current_tag: initial,
            current,
            guards,
            history: StateHistory::with_limit(config.history_limit),
            sequence: 0,
            started: false,
            auto_start: config.auto_start,
            outputs: Outputs::new(),
            bindings: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag designated as this machine's starting state.
    pub fn initial_state(&self) -> S::Tag {
        self.initial
    }

    /// Tag of the current state.
    pub fn current_tag(&self) -> S::Tag {
        self.current_tag
    }

    /// The current state instance.
    pub fn current(&self) -> &Arc<S> {
        &self.current
    }

    pub fn is_final(&self) -> bool {
        self.current_tag.is_final()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn slots(&self) -> &StateSlots<S> {
        &self.slots
    }

    pub fn history(&self) -> &StateHistory<S::Tag> {
        &self.history
    }

    /// Enter the initial state, running its `on_enter` hook.
    ///
    /// Only the first call has any effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(
            machine = %self.name,
            state = self.current_tag.name(),
            "Starting state machine"
        );
        self.current.on_enter(&mut self.outputs);
        self.flush();
    }

    fn ensure_started(&mut self) -> Result<(), TransitionError> {
        if self.started {
            return Ok(());
        }
        if !self.auto_start {
            return Err(TransitionError::NotStarted {
                machine: self.name.clone(),
            });
        }
        self.start();
        Ok(())
    }

    fn lookup(&self, target: S::Tag) -> Result<Arc<S>, TransitionError> {
        self.slots
            .get(target)
            .map(Arc::clone)
            .map_err(|_| TransitionError::UnknownVariant {
                state: target.name().to_string(),
            })
    }

    /// Move to the pre-allocated instance registered under `target`.
    ///
    /// Returns the instance now current. A transition to the current state
    /// succeeds without running any hooks or recording history.
    pub fn transition_to(&mut self, target: S::Tag) -> Result<Arc<S>, TransitionError> {
        let next = self.lookup(target)?;
        self.ensure_started()?;

        let from = self.current_tag;
        if from == target {
            return Ok(next);
        }

        if from.is_final() {
            tracing::warn!(
                machine = %self.name,
                from = from.name(),
                to = target.name(),
                "Rejected transition out of final state"
            );
            return Err(TransitionError::FinalState {
                state: from.name().to_string(),
            });
        }

        if self.guards.iter().any(|guard| !guard.check(from, target)) {
            tracing::warn!(
                machine = %self.name,
                from = from.name(),
                to = target.name(),
                "Guard blocked transition"
            );
            return Err(TransitionError::GuardBlocked {
                from: from.name().to_string(),
                to: target.name().to_string(),
            });
        }

        self.swap(target, next);
        Ok(Arc::clone(&self.current))
    }

    fn swap(&mut self, target: S::Tag, next: Arc<S>) {
        let from = self.current_tag;
        self.current.on_exit(&mut self.outputs);
        self.current = next;
        self.current_tag = target;
        self.current.on_enter(&mut self.outputs);

        self.sequence += 1;
        self.history.record(StateTransition {
            from,
            to: target,
            timestamp: Utc::now(),
            sequence: self.sequence,
        });
        tracing::debug!(
            machine = %self.name,
            from = from.name(),
            to = target.name(),
            sequence = self.sequence,
            "State transition"
        );
        self.flush();
    }

    /// Feed an input to the current state and apply its reaction.
    pub fn input(&mut self, input: &S::Input) -> Result<StepResult<S::Tag>, TransitionError> {
        self.ensure_started()?;

        let from = self.current_tag;
        let reaction = self.current.on_input(input, &mut self.outputs);
        let result = match reaction {
            Reaction::Stay => Ok(StepResult::Stayed(from)),
            Reaction::To(target) if target == from => Ok(StepResult::Stayed(from)),
            Reaction::To(target) => self
                .transition_to(target)
                .map(|_| StepResult::Transitioned { from, to: target }),
        };
        self.flush();
        result
    }

    /// Return to the initial state, bypassing guards and final states.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.ensure_started()?;
        if self.current_tag == self.initial {
            return Ok(());
        }

        let next = self.lookup(self.initial)?;
        tracing::info!(
            machine = %self.name,
            from = self.current_tag.name(),
            to = self.initial.name(),
            "Resetting state machine"
        );
        self.swap(self.initial, next);
        Ok(())
    }

    /// Register a handler receiving every output states emit.
    pub fn bind<F>(&mut self, handler: F) -> BindingId
    where
        F: FnMut(&S::Output) + Send + 'static,
    {
        let id = BindingId::new();
        self.bindings.push((id, Box::new(handler)));
        id
    }

    /// Remove a binding. Returns `false` if it was already gone.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(binding, _)| *binding != id);
        self.bindings.len() != before
    }

    fn flush(&mut self) {
        for output in self.outputs.drain() {
            for (_, handler) in self.bindings.iter_mut() {
                handler(&output);
            }
        }
    }
}

impl<S: LogicState> std::fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("initial", &self.initial)
            .field("current", &self.current_tag)
            .field("started", &self.started)
            .field("states", &self.slots.len())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
