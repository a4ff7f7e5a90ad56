use crate::error::SearchError;
use crate::game::{Board, Player};

/// Universal interface for move-selecting opponents.
pub trait Agent {
    /// Select a column for `player` on `board`.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] when the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
