//! Foo Toggle
//!
//! Builds the two-state toggle machine, binds an output handler and feeds it
//! a few toggles. Transitions are logged through `tracing`.
//!
//! Run with: RUST_LOG=debug cargo run --example foo_toggle

use logicblock::logic::{FooInput, FooLogic, FooOutput};
use logicblock::machine::StateMachine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Foo Toggle Example ===\n");

    let mut machine = StateMachine::from_logic::<FooLogic>()?;
    machine.bind(|output: &FooOutput| {
        let FooOutput::StateChanged { state } = output;
        println!("State changed to: {state}");
    });

    machine.start();
    for _ in 0..3 {
        machine.input(&FooInput::Toggle)?;
    }

    println!("\nPath: {:?}", machine.history().get_path());
    println!("\n=== Example Complete ===");
    Ok(())
}
