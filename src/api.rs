//! The two calls external collaborators (UI, persistence, statistics) make
//! into the core.

use rand::Rng;

use crate::ai::{select_move_with, Difficulty, HeuristicWeights, MinimaxSearch, SearchConfig};
use crate::error::{MoveError, SearchError};
use crate::game::{Board, GameResult, Player};

/// Drop `player`'s piece into `column` of a copy of `board` and report the
/// resulting status. The input board is left untouched.
pub fn apply_move(
    board: &Board,
    column: usize,
    player: Player,
) -> Result<(Board, GameResult), MoveError> {
    let mut next = *board;
    next.drop_piece(column, player)?;
    let result = next.result();
    Ok((next, result))
}

/// Choose the AI's column using the built-in settings for `difficulty`.
pub fn choose_ai_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
) -> Result<usize, SearchError> {
    choose_ai_move_with(
        board,
        player,
        &SearchConfig::for_difficulty(difficulty),
        &HeuristicWeights::default(),
        &mut rand::rng(),
    )
}

/// Choose the AI's column with explicit search settings and randomness source.
pub fn choose_ai_move_with<R: Rng>(
    board: &Board,
    player: Player,
    config: &SearchConfig,
    weights: &HeuristicWeights,
    rng: &mut R,
) -> Result<usize, SearchError> {
    let search = MinimaxSearch::with_weights(config.depth, weights.clone());
    select_move_with(&search, config.random_chance, board, player, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn apply_move_returns_new_board_and_status() {
        let board = Board::new();
        let (next, result) = apply_move(&board, 3, Player::Red).unwrap();
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(next.piece_count(), 1);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn apply_move_reports_win() {
        let board = Board::from_moves(&[0, 0, 1, 1, 2, 2]).unwrap();
        let (_, result) = apply_move(&board, 3, Player::Red).unwrap();
        assert_eq!(result, GameResult::Win(Player::Red));
    }

    #[test]
    fn apply_move_rejects_invalid_column() {
        let board = Board::from_moves(&[5, 5, 5, 5, 5, 5]).unwrap();
        assert_eq!(
            apply_move(&board, 5, Player::Red),
            Err(MoveError::ColumnFull(5))
        );
        assert_eq!(
            apply_move(&board, 7, Player::Red),
            Err(MoveError::OutOfRange(7))
        );
    }

    #[test]
    fn choose_ai_move_takes_win_at_medium_and_hard() {
        let board = Board::from_moves(&[0, 0, 1, 1, 2, 2]).unwrap();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_ai_move(&board, Player::Red, difficulty).unwrap(), 3);
        }
    }

    #[test]
    fn choose_ai_move_blocks_at_medium_and_hard() {
        let board = Board::from_moves(&[6, 0, 6, 1, 5, 2]).unwrap();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_ai_move(&board, Player::Red, difficulty).unwrap(), 3);
        }
    }

    #[test]
    fn easy_without_randomness_takes_win() {
        let board = Board::from_moves(&[0, 0, 1, 1, 2, 2]).unwrap();
        let config = SearchConfig::for_difficulty(Difficulty::Easy).deterministic();
        let mut rng = StdRng::seed_from_u64(0);
        let col = choose_ai_move_with(
            &board,
            Player::Red,
            &config,
            &HeuristicWeights::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn deterministic_config_repeats_choice() {
        let board = Board::from_moves(&[3, 2, 4]).unwrap();
        let config = SearchConfig::for_difficulty(Difficulty::Hard);
        let weights = HeuristicWeights::default();
        let mut rng = StdRng::seed_from_u64(0);
        let first = choose_ai_move_with(&board, Player::Yellow, &config, &weights, &mut rng).unwrap();
        for _ in 0..3 {
            assert_eq!(
                choose_ai_move_with(&board, Player::Yellow, &config, &weights, &mut rng).unwrap(),
                first
            );
        }
    }

    #[test]
    fn choose_ai_move_on_full_board_fails() {
        let mut board = Board::new();
        for col in 0..crate::game::COLS {
            for _ in 0..crate::game::ROWS {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert_eq!(
            choose_ai_move(&board, Player::Yellow, Difficulty::Easy),
            Err(SearchError::NoLegalMoves)
        );
    }
}
