//! Placement states of a block on the board.

use crate::builder::LogicBlock;
use crate::core::LogicState;
use crate::state_tags;

state_tags! {
    /// Where a block currently is.
    pub enum BlockState {
        Placed,
        Dragging,
        InToolbar,
    }
}

impl LogicState for BlockState {
    type Tag = Self;
    type Input = ();
    type Output = ();

    fn tag(&self) -> Self {
        *self
    }
}

/// Block placement machine. Starts `Placed`.
pub struct BlockLogic;

impl LogicBlock for BlockLogic {
    type State = BlockState;
    const NAME: &'static str = "block_logic";

    fn states() -> Vec<BlockState> {
        vec![BlockState::Placed, BlockState::Dragging, BlockState::InToolbar]
    }

    fn initial_state() -> BlockState {
        BlockState::Placed
    }
}
