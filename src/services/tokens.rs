//! Token lifecycle collaborator.

/// Spawns and tears down the tokens that travel between blocks.
///
/// The manager owns every token it spawns; callers only say where tokens
/// start and when they should stop or disappear.
pub trait TokenManager {
    /// Where a token starts: a block handle, a position, and so on.
    type Location;

    fn spawn_token(&mut self, start: &Self::Location);

    /// Spawn one token per start location, in order.
    fn spawn_tokens(&mut self, starts: &[Self::Location]) {
        for start in starts {
            self.spawn_token(start);
        }
    }

    /// Halt every live token in place.
    fn stop_all_tokens(&mut self);

    /// Remove every token.
    fn clear_all_tokens(&mut self);
}
