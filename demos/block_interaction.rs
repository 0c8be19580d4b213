//! Block Interaction
//!
//! Drives the block interaction machine through an input controller the way
//! a host event loop would: clicks, pointer motion over a pipe and a space
//! press that spawns a token. Ends by checkpointing the machine to JSON and
//! restoring a fresh one from it.
//!
//! Run with: RUST_LOG=debug cargo run --example block_interaction

use logicblock::checkpoint::Checkpoint;
use logicblock::logic::{InteractionController, InteractionLogic, InteractionOutput};
use logicblock::machine::StateMachine;
use logicblock::services::{
    ConfigSceneTree, InputEvent, InputManager, Key, KeyEvent, MouseButton, MouseButtonEvent,
    MouseMotionEvent, SceneTreeService, TokenManager, Vector2,
};
use tracing_subscriber::EnvFilter;

const SCENE: &str = r#"{
    "root": {
        "type": "Node2D",
        "name": "Main",
        "children": {
            "Tokens": { "type": "Node2D", "name": "TokenLayer" }
        }
    }
}"#;

/// Prints token lifecycle calls instead of spawning real tokens.
struct PrintingTokens {
    layer: String,
    live: usize,
}

impl TokenManager for PrintingTokens {
    type Location = Vector2;

    fn spawn_token(&mut self, start: &Vector2) {
        self.live += 1;
        println!(
            "Spawned token #{} under {} at ({}, {})",
            self.live, self.layer, start.x, start.y
        );
    }

    fn stop_all_tokens(&mut self) {
        println!("Stopped {} token(s)", self.live);
    }

    fn clear_all_tokens(&mut self) {
        self.live = 0;
    }
}

fn click(button: MouseButton, x: f32, y: f32) -> InputEvent {
    InputEvent::MouseButton(MouseButtonEvent {
        button,
        pressed: true,
        position: Vector2::new(x, y),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Block Interaction Example ===\n");

    let scene = ConfigSceneTree::from_json(SCENE)?;
    let tokens = PrintingTokens {
        layer: scene.get_path("Main.Tokens")?,
        live: 0,
    };

    let mut machine = StateMachine::from_logic::<InteractionLogic>()?;
    machine.bind(|InteractionOutput::Entered(state)| println!("Entered {state:?}"));

    // Pipes sit on the right half of the board
    let mut controller = InteractionController::new(machine, tokens, |p: Vector2| p.x >= 400.0);

    let events = [
        click(MouseButton::Left, 32.0, 600.0),
        click(MouseButton::Left, 120.0, 240.0),
        InputEvent::MouseMotion(MouseMotionEvent {
            position: Vector2::new(420.0, 240.0),
            relative: Vector2::new(300.0, 0.0),
        }),
        InputEvent::Key(KeyEvent {
            key: Key::Space,
            pressed: true,
            echo: false,
        }),
    ];
    for event in &events {
        controller.handle_input(event);
    }

    let saved = controller.machine().checkpoint().to_json()?;
    println!("\nCheckpoint: {saved}");

    let mut restored = StateMachine::from_logic::<InteractionLogic>()?;
    restored.restore(&Checkpoint::from_json(&saved)?)?;
    println!("Restored into {:?}", restored.current_tag());

    controller.handle_input(&click(MouseButton::Right, 420.0, 240.0));

    println!("\n=== Example Complete ===");
    Ok(())
}
