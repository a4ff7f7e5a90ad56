use super::Player;

/// Status of a board, always recomputed from the cells via [`Board::result`].
///
/// [`Board::result`]: super::Board::result
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_and_winner() {
        assert!(!GameResult::InProgress.is_terminal());
        assert!(GameResult::Draw.is_terminal());
        assert!(GameResult::Win(Player::Red).is_terminal());
        assert_eq!(GameResult::Win(Player::Yellow).winner(), Some(Player::Yellow));
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
