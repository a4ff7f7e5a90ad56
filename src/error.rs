use std::path::PathBuf;

/// A rejected drop. Recoverable: the caller should ask for another column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move: column {0} is out of range (expected 0..=6)")]
    OutOfRange(usize),

    #[error("invalid move: column {0} is full")]
    ColumnFull(usize),
}

/// A grid that cannot arise from legal play, rejected when a board is
/// built from raw cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board: piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },

    #[error("invalid board: {red} red and {yellow} yellow pieces cannot follow Red moving first")]
    PieceCount { red: usize, yellow: usize },

    #[error("invalid board: both players have four in a row")]
    BothPlayersWin,
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The board is already full; callers must check the result before searching.
    #[error("no legal moves: the board is full")]
    NoLegalMoves,
}

/// Errors raised while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("game is over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(crate::game::Player),

    #[error("failed to parse saved game: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull(3).to_string(),
            "invalid move: column 3 is full"
        );
        assert_eq!(
            MoveError::OutOfRange(9).to_string(),
            "invalid move: column 9 is out of range (expected 0..=6)"
        );
    }

    #[test]
    fn test_board_error_display() {
        assert_eq!(
            BoardError::FloatingPiece { row: 0, col: 0 }.to_string(),
            "invalid board: piece at row 0, column 0 has an empty cell below it"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::from(SearchError::NoLegalMoves);
        assert_eq!(err.to_string(), "no legal moves: the board is full");

        let err = SessionError::NotYourTurn(Player::Yellow);
        assert_eq!(err.to_string(), "it is not Yellow's turn");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("hard.depth must be in 1..=12".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: hard.depth must be in 1..=12"
        );
    }
}
