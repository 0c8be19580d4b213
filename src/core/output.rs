//! Output buffering and input reactions.

/// What a state wants to happen after handling an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction<T> {
    /// Remain in the current state
    Stay,

    /// Transition to the state registered under this tag
    To(T),
}

/// Buffer of outputs emitted by state hooks.
///
/// The machine hands one of these to every hook it invokes and delivers the
/// collected outputs, in emission order, once the hook returns.
#[derive(Debug)]
pub struct Outputs<O> {
    pending: Vec<O>,
}

impl<O> Outputs<O> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue an output for delivery.
    pub fn emit(&mut self, output: O) {
        self.pending.push(output);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, O> {
        self.pending.drain(..)
    }
}

impl<O> Default for Outputs<O> {
    fn default() -> Self {
        Self::new()
    }
}
