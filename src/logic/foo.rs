//! Two-state toggle machine.

use crate::builder::LogicBlock;
use crate::core::{LogicState, Outputs, Reaction, StateTag};
use crate::state_tags;

state_tags! {
    pub enum FooState {
        Foo,
        Bar,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooInput {
    Toggle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FooOutput {
    /// Emitted whenever a state is entered
    StateChanged { state: &'static str },
}

impl LogicState for FooState {
    type Tag = Self;
    type Input = FooInput;
    type Output = FooOutput;

    fn tag(&self) -> Self {
        *self
    }

    fn on_enter(&self, outputs: &mut Outputs<FooOutput>) {
        outputs.emit(FooOutput::StateChanged { state: self.name() });
    }

    fn on_input(&self, input: &FooInput, _outputs: &mut Outputs<FooOutput>) -> Reaction<Self> {
        match (self, input) {
            (FooState::Foo, FooInput::Toggle) => Reaction::To(FooState::Bar),
            (FooState::Bar, FooInput::Toggle) => Reaction::To(FooState::Foo),
        }
    }
}

pub struct FooLogic;

impl LogicBlock for FooLogic {
    type State = FooState;
    const NAME: &'static str = "foo_logic";

    fn states() -> Vec<FooState> {
        vec![FooState::Foo, FooState::Bar]
    }

    fn initial_state() -> FooState {
        FooState::Foo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{StateMachine, StepResult};
    use std::sync::{Arc, Mutex};

    #[test]
    fn toggle_alternates_states() {
        let mut machine = StateMachine::from_logic::<FooLogic>().unwrap();

        let expected = [FooState::Bar, FooState::Foo, FooState::Bar, FooState::Foo];
        for state in expected {
            let step = machine.input(&FooInput::Toggle).unwrap();
            assert_eq!(step.state(), state);
        }
        assert_eq!(machine.history().len(), 4);
    }

    #[test]
    fn every_entry_announces_itself() {
        let mut machine = StateMachine::from_logic::<FooLogic>().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        machine.bind(move |output: &FooOutput| {
            let FooOutput::StateChanged { state } = output;
            sink.lock().unwrap().push(*state);
        });

        machine.start();
        machine.input(&FooInput::Toggle).unwrap();
        machine.input(&FooInput::Toggle).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["Foo", "Bar", "Foo"]);
    }

    #[test]
    fn toggle_reports_edge() {
        let mut machine = StateMachine::from_logic::<FooLogic>().unwrap();

        assert_eq!(
            machine.input(&FooInput::Toggle).unwrap(),
            StepResult::Transitioned {
                from: FooState::Foo,
                to: FooState::Bar
            }
        );
    }
}
