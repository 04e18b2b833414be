use crate::game::GameState;

/// Anything that can pick a column for the player to move.
pub trait Agent {
    /// Select a column given the current game state. `None` means the agent
    /// has no move to offer (board full, or a depth-zero search) and the
    /// caller treats it as the end of the game or a forfeit.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
