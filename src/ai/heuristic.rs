use crate::game::{windows, Board, Cell, Player, CENTER_COL, ROWS};

/// Trait for evaluating a non-terminal board from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Per-pattern weights for [`WindowHeuristic`]. Opponent weights are
/// subtracted, so all values are given as magnitudes.
///
/// The defaults are deliberately asymmetric: an opponent three costs more
/// than an own three earns, so between an equal threat of each kind the
/// engine prefers to block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Three own pieces and one empty cell in a window.
    pub three: i32,
    /// Two own pieces and two empty cells.
    pub two: i32,
    pub opponent_three: i32,
    pub opponent_two: i32,
    /// Per piece in the center column.
    pub center: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            three: 50,
            two: 10,
            opponent_three: 80,
            opponent_two: 10,
            center: 3,
        }
    }
}

/// Default heuristic that scans all 4-cell windows and scores threats.
#[derive(Debug, Clone, Default)]
pub struct WindowHeuristic {
    weights: HeuristicWeights,
}

impl WindowHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        WindowHeuristic { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> i32 {
        let w = &self.weights;
        match (own, opp, empty) {
            (3, 0, 1) => w.three,
            (2, 0, 2) => w.two,
            (0, 3, 1) => -w.opponent_three,
            (0, 2, 2) => -w.opponent_two,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let mut score = 0;

        // Center column bonus
        for row in 0..ROWS {
            match board.get(row, CENTER_COL) {
                Cell::Empty => {}
                cell if cell == own_cell => score += self.weights.center,
                _ => score -= self.weights.center,
            }
        }

        for window in windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for (row, col) in window {
                match board.get(row, col) {
                    Cell::Empty => empty += 1,
                    c if c == own_cell => own += 1,
                    _ => opp += 1,
                }
            }
            score += self.score_window(own, opp, empty);
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        let h = WindowHeuristic::default();
        assert_eq!(h.evaluate(&board, Player::Red), 0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn center_preference() {
        let h = WindowHeuristic::default();
        let mut board_center = Board::new();
        board_center.drop_piece(3, Player::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.drop_piece(0, Player::Red).unwrap();

        let score_center = h.evaluate(&board_center, Player::Red);
        let score_edge = h.evaluate(&board_edge, Player::Red);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn center_piece_only_counts_center_weight() {
        let weights = HeuristicWeights {
            center: 7,
            ..HeuristicWeights::default()
        };
        let h = WindowHeuristic::new(weights);
        let board = Board::from_moves(&[3]).unwrap();
        // A single piece completes no two-of-four window
        assert_eq!(h.evaluate(&board, Player::Red), 7);
        assert_eq!(h.evaluate(&board, Player::Yellow), -7);
    }

    #[test]
    fn three_in_a_row_scores_high() {
        let h = WindowHeuristic::default();
        let mut board = Board::new();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(2, Player::Red).unwrap();
        // 3 red in a row with col 3 empty = a threat
        let score = h.evaluate(&board, Player::Red);
        assert!(score > 40, "3-in-a-row should score high, got {score}");
        assert!(h.evaluate(&board, Player::Yellow) < -70);
    }

    #[test]
    fn mixed_windows_score_nothing() {
        let h = WindowHeuristic::new(HeuristicWeights {
            center: 0,
            ..HeuristicWeights::default()
        });
        let mut board = Board::new();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        // Every window containing both pieces is blocked; windows with only
        // one piece have too few to score.
        assert_eq!(h.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn opponent_three_outweighs_own_three() {
        let h = WindowHeuristic::default();
        // Bottom row: R R R . Y Y Y
        let board = Board::from_moves(&[0, 4, 1, 5, 2, 6]).unwrap();
        let weights = HeuristicWeights::default();
        let expected = weights.three - weights.opponent_three;
        assert!(expected < 0);
        assert_eq!(h.evaluate(&board, Player::Red), expected);
        assert_eq!(h.evaluate(&board, Player::Yellow), expected);
    }
}
