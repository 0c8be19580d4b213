//! Declarative machine definitions.

use crate::config::MachineConfig;
use crate::core::{Guard, LogicState, StateTag};

/// Definition of a concrete machine type.
///
/// A definition enumerates every state the machine can ever occupy and
/// names its starting state. Both are fixed by the type, not computed from
/// runtime data; [`StateMachine::from_logic`](crate::machine::StateMachine::from_logic)
/// turns a definition into a running machine and rejects it at construction
/// if the initial state is not among the enumerated ones.
///
/// # Example
///
/// ```rust
/// use logicblock::builder::LogicBlock;
/// use logicblock::machine::StateMachine;
/// use logicblock::state_tags;
/// use logicblock::core::LogicState;
///
/// state_tags! {
///     pub enum Light {
///         Off,
///         On,
///     }
/// }
///
/// impl LogicState for Light {
///     type Tag = Self;
///     type Input = ();
///     type Output = ();
///
///     fn tag(&self) -> Self {
///         *self
///     }
/// }
///
/// struct LightLogic;
///
/// impl LogicBlock for LightLogic {
///     type State = Light;
///     const NAME: &'static str = "light";
///
///     fn states() -> Vec<Light> {
///         vec![Light::Off, Light::On]
///     }
///
///     fn initial_state() -> Light {
///         Light::Off
///     }
/// }
///
/// let machine = StateMachine::from_logic::<LightLogic>().unwrap();
/// assert_eq!(machine.current_tag(), Light::Off);
/// ```
pub trait LogicBlock {
    type State: LogicState;

    /// Name used in logs and checkpoints.
    const NAME: &'static str;

    /// Freshly constructed instances of every state the machine can occupy.
    fn states() -> Vec<Self::State>;

    /// The state the machine starts in.
    fn initial_state() -> <Self::State as LogicState>::Tag;

    fn config() -> MachineConfig {
        MachineConfig::named(Self::NAME)
    }

    fn guards() -> Vec<Guard<<Self::State as LogicState>::Tag>> {
        Vec::new()
    }
}

/// Every tag a definition registers, in declaration order.
pub fn declared_tags<L: LogicBlock>() -> Vec<<L::State as LogicState>::Tag> {
    L::states().iter().map(LogicState::tag).collect()
}

/// Names of every declared state, in declaration order.
pub fn declared_names<L: LogicBlock>() -> Vec<&'static str> {
    declared_tags::<L>().iter().map(StateTag::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{BlockLogic, FooLogic, InteractionLogic};

    #[test]
    fn declared_names_follow_definition_order() {
        assert_eq!(
            declared_names::<BlockLogic>(),
            vec!["Placed", "Dragging", "InToolbar"]
        );
        assert_eq!(declared_names::<FooLogic>(), vec!["Foo", "Bar"]);
    }

    #[test]
    fn default_config_uses_definition_name() {
        assert_eq!(InteractionLogic::config().name, InteractionLogic::NAME);
    }
}
