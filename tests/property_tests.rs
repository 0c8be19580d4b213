//! Property-based tests for pre-allocated state machines.
//!
//! These tests use proptest to drive machines through many randomly
//! generated transition and input sequences.

use logicblock::builder::LogicBlock;
use logicblock::checkpoint::Checkpoint;
use logicblock::core::StateTag;
use logicblock::logic::{
    BlockLogic, BlockState, FooInput, FooLogic, InteractionInput, InteractionLogic,
    InteractionState,
};
use logicblock::machine::{StateMachine, StepResult};
use proptest::prelude::*;
use std::sync::Arc;

prop_compose! {
    fn arbitrary_block_state()(variant in 0..3u8) -> BlockState {
        match variant {
            0 => BlockState::Placed,
            1 => BlockState::Dragging,
            _ => BlockState::InToolbar,
        }
    }
}

prop_compose! {
    fn arbitrary_interaction_input()(variant in 0..3u8) -> InteractionInput {
        match variant {
            0 => InteractionInput::Interact,
            1 => InteractionInput::ReturnBlock,
            _ => InteractionInput::HoveredOverPipe,
        }
    }
}

proptest! {
    #[test]
    fn construction_starts_in_initial_state(_seed in 0..4u8) {
        let machine = StateMachine::from_logic::<InteractionLogic>().unwrap();
        prop_assert_eq!(machine.current_tag(), machine.initial_state());
        prop_assert_eq!(machine.current_tag(), InteractionLogic::initial_state());
    }

    #[test]
    fn instances_are_stable_across_transitions(
        targets in prop::collection::vec(arbitrary_block_state(), 1..32)
    ) {
        let mut machine = StateMachine::from_logic::<BlockLogic>().unwrap();
        let originals: Vec<_> = BlockLogic::states()
            .into_iter()
            .map(|tag| (tag, Arc::clone(machine.slots().get(tag).unwrap())))
            .collect();

        for target in targets {
            let instance = machine.transition_to(target).unwrap();
            let (_, original) = originals.iter().find(|(tag, _)| *tag == target).unwrap();
            prop_assert!(Arc::ptr_eq(original, &instance));
            prop_assert_eq!(machine.current_tag(), target);
        }
    }

    #[test]
    fn history_path_matches_visited_states(
        targets in prop::collection::vec(arbitrary_block_state(), 1..32)
    ) {
        let mut machine = StateMachine::from_logic::<BlockLogic>().unwrap();
        let mut expected = vec![machine.current_tag()];

        for target in targets {
            if target != machine.current_tag() {
                expected.push(target);
            }
            machine.transition_to(target).unwrap();
        }

        let path = machine.history().get_path();
        if expected.len() == 1 {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path, expected);
        }
    }

    #[test]
    fn inputs_always_land_on_registered_states(
        inputs in prop::collection::vec(arbitrary_interaction_input(), 0..64)
    ) {
        let mut machine = StateMachine::from_logic::<InteractionLogic>().unwrap();

        for input in inputs {
            let before = machine.current_tag();
            let step = machine.input(&input).unwrap();
            match step {
                StepResult::Transitioned { from, to } => {
                    prop_assert_eq!(from, before);
                    prop_assert_ne!(from, to);
                }
                StepResult::Stayed(state) => prop_assert_eq!(state, before),
            }
            prop_assert!(machine.slots().contains(machine.current_tag()));
        }
    }

    #[test]
    fn toggle_parity_decides_state(count in 0..50usize) {
        let mut machine = StateMachine::from_logic::<FooLogic>().unwrap();
        for _ in 0..count {
            machine.input(&FooInput::Toggle).unwrap();
        }

        let expected = if count % 2 == 0 { "Foo" } else { "Bar" };
        prop_assert_eq!(machine.current_tag().name(), expected);
        prop_assert_eq!(machine.history().len(), count);
    }

    #[test]
    fn checkpoint_round_trip_preserves_position(
        inputs in prop::collection::vec(arbitrary_interaction_input(), 0..32)
    ) {
        let mut machine = StateMachine::from_logic::<InteractionLogic>().unwrap();
        for input in inputs {
            machine.input(&input).unwrap();
        }

        let bytes = machine.checkpoint().to_binary().unwrap();
        let checkpoint = Checkpoint::<InteractionState>::from_binary(&bytes).unwrap();

        let mut restored = StateMachine::from_logic::<InteractionLogic>().unwrap();
        restored.restore(&checkpoint).unwrap();

        prop_assert_eq!(restored.current_tag(), machine.current_tag());
        prop_assert_eq!(restored.history().get_path(), machine.history().get_path());
    }

    #[test]
    fn tag_roundtrip_serialization(state in arbitrary_block_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BlockState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
