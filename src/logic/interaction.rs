//! Block interaction: toolbar, dragging, placement and pipe connection.
//!
//! ```text
//! InToolbar --Interact--> Dragging --Interact--> Placed
//!                            |                    |  ^
//!                     HoveredOverPipe   HoveredOverPipe  Interact
//!                            v                    v  |
//!             ConnectedAndDragging <--Interact-- Connected
//!                            \--Interact-->/
//! Connected, ConnectedAndDragging --ReturnBlock--> InToolbar
//! ```

use crate::builder::LogicBlock;
use crate::core::{LogicState, Outputs, Reaction};
use crate::machine::{StateMachine, StepResult};
use crate::services::input::{InputManager, MouseButtonEvent, MouseMotionEvent, Vector2};
use crate::services::tokens::TokenManager;
use crate::state_tags;

state_tags! {
    pub enum InteractionState {
        InToolbar,
        Dragging,
        Placed,
        Connected,
        ConnectedAndDragging,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionInput {
    /// Primary click on the block
    Interact,
    /// Send the block back to the toolbar
    ReturnBlock,
    /// The block is over a pipe endpoint
    HoveredOverPipe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutput {
    Entered(InteractionState),
}

impl LogicState for InteractionState {
    type Tag = Self;
    type Input = InteractionInput;
    type Output = InteractionOutput;

    fn tag(&self) -> Self {
        *self
    }

    fn on_enter(&self, outputs: &mut Outputs<InteractionOutput>) {
        outputs.emit(InteractionOutput::Entered(*self));
    }

    fn on_input(
        &self,
        input: &InteractionInput,
        _outputs: &mut Outputs<InteractionOutput>,
    ) -> Reaction<Self> {
        use InteractionInput::*;
        use InteractionState::*;

        match (self, input) {
            (InToolbar, Interact) => Reaction::To(Dragging),
            (Dragging, Interact) => Reaction::To(Placed),
            (Dragging, HoveredOverPipe) => Reaction::To(ConnectedAndDragging),
            (Placed, Interact) => Reaction::To(Dragging),
            (Placed, HoveredOverPipe) => Reaction::To(Connected),
            (Connected, Interact) => Reaction::To(ConnectedAndDragging),
            (Connected, ReturnBlock) => Reaction::To(InToolbar),
            (ConnectedAndDragging, Interact) => Reaction::To(Connected),
            (ConnectedAndDragging, ReturnBlock) => Reaction::To(InToolbar),
            _ => Reaction::Stay,
        }
    }
}

/// Interaction machine for a block that starts in the toolbar.
pub struct InteractionLogic;

impl LogicBlock for InteractionLogic {
    type State = InteractionState;
    const NAME: &'static str = "block_interaction";

    fn states() -> Vec<InteractionState> {
        vec![
            InteractionState::InToolbar,
            InteractionState::Dragging,
            InteractionState::Placed,
            InteractionState::Connected,
            InteractionState::ConnectedAndDragging,
        ]
    }

    fn initial_state() -> InteractionState {
        InteractionState::InToolbar
    }
}

type PipeHitTest = Box<dyn Fn(Vector2) -> bool + Send>;

/// Translates pointer input into interaction inputs for one block.
///
/// Left clicks interact, right clicks return the block to the toolbar,
/// pointer motion over a pipe connects it, and the space key spawns a token
/// at the block while it is connected.
pub struct InteractionController<T: TokenManager<Location = Vector2>> {
    machine: StateMachine<InteractionState>,
    tokens: T,
    position: Vector2,
    over_pipe: PipeHitTest,
}

impl<T: TokenManager<Location = Vector2>> InteractionController<T> {
    pub fn new<F>(machine: StateMachine<InteractionState>, tokens: T, over_pipe: F) -> Self
    where
        F: Fn(Vector2) -> bool + Send + 'static,
    {
        Self {
            machine,
            tokens,
            position: Vector2::ZERO,
            over_pipe: Box::new(over_pipe),
        }
    }

    pub fn machine(&self) -> &StateMachine<InteractionState> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut StateMachine<InteractionState> {
        &mut self.machine
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    fn send(&mut self, input: InteractionInput) -> Option<StepResult<InteractionState>> {
        match self.machine.input(&input) {
            Ok(step) => Some(step),
            Err(err) => {
                tracing::warn!(%err, ?input, "Interaction input rejected");
                None
            }
        }
    }
}

impl<T: TokenManager<Location = Vector2>> InputManager for InteractionController<T> {
    fn handle_mouse_motion(&mut self, motion: &MouseMotionEvent) {
        self.position = motion.position;
        if (self.over_pipe)(motion.position) {
            self.send(InteractionInput::HoveredOverPipe);
        }
    }

    fn handle_left_click(&mut self, event: &MouseButtonEvent) {
        if event.pressed {
            self.position = event.position;
            self.send(InteractionInput::Interact);
        }
    }

    fn handle_right_click(&mut self, event: &MouseButtonEvent) {
        if !event.pressed {
            return;
        }
        let step = self.send(InteractionInput::ReturnBlock);
        if let Some(StepResult::Transitioned {
            to: InteractionState::InToolbar,
            ..
        }) = step
        {
            self.tokens.stop_all_tokens();
        }
    }

    fn handle_space_press(&mut self) {
        if self.machine.current_tag() == InteractionState::Connected {
            self.tokens.spawn_token(&self.position);
        } else {
            tracing::debug!(
                state = ?self.machine.current_tag(),
                "Ignoring token spawn for unconnected block"
            );
        }
    }
}
