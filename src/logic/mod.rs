//! Concrete logic blocks used by the game.

mod block;
mod foo;
mod interaction;

pub use block::{BlockLogic, BlockState};
pub use foo::{FooInput, FooLogic, FooOutput, FooState};
pub use interaction::{
    InteractionController, InteractionInput, InteractionLogic, InteractionOutput, InteractionState,
};
