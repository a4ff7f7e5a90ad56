use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::{Board, GameResult, Player, COLS};

use super::agent::Agent;
use super::difficulty::{Difficulty, SearchConfig};
use super::heuristic::{Heuristic, HeuristicWeights, WindowHeuristic};

/// Base score of a won position. Always dominates any heuristic value.
pub const WIN_SCORE: i32 = 1_000_000;

const INF: i32 = i32::MAX;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: usize,
    /// Score of `column` from the searching player's perspective.
    pub score: i32,
    /// Positions visited, including pruned-early ones.
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Stateless between calls: every search is a pure function of the board,
/// the player to move and the configured depth and heuristic. Moves are tried
/// in ascending column order and the root keeps the first of equally scored
/// moves, so results are reproducible.
pub struct MinimaxSearch {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxSearch {
    pub fn new(depth: usize) -> Self {
        MinimaxSearch {
            depth,
            heuristic: Box::new(WindowHeuristic::default()),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch { depth, heuristic }
    }

    pub fn with_weights(depth: usize, weights: HeuristicWeights) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic::new(weights)))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the best column for `player`.
    pub fn best_move(&self, board: &Board, player: Player) -> Result<SearchOutcome, SearchError> {
        let mut nodes = 0;
        let mut best: Option<(usize, i32)> = None;
        let mut alpha = -INF;
        let remaining = self.depth.saturating_sub(1);

        for col in 0..COLS {
            let Some(child) = play(board, col, player) else {
                continue;
            };
            let score = self.minimax(&child, remaining, alpha, INF, false, player, &mut nodes);
            // Strictly greater: ties keep the lower column
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
            alpha = alpha.max(score);
        }

        let (column, score) = best.ok_or(SearchError::NoLegalMoves)?;
        Ok(SearchOutcome {
            column,
            score,
            nodes,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        me: Player,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        // Remaining depth rewards quick wins and delays losses
        match board.result() {
            GameResult::Win(winner) if winner == me => return WIN_SCORE + depth as i32,
            GameResult::Win(_) => return -(WIN_SCORE + depth as i32),
            GameResult::Draw => return 0,
            GameResult::InProgress => {}
        }

        if depth == 0 {
            return self.heuristic.evaluate(board, me);
        }

        let mover = if maximizing { me } else { me.other() };
        let mut value = if maximizing { -INF } else { INF };

        for col in 0..COLS {
            let Some(child) = play(board, col, mover) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, me, nodes);
            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        value
    }
}

/// Copy of `board` with `player`'s piece dropped in `col`, if the column is open.
fn play(board: &Board, col: usize, player: Player) -> Option<Board> {
    let mut child = *board;
    child.drop_piece(col, player).ok()?;
    Some(child)
}

/// Roll `random_chance` against `rng`; on a hit pick a uniformly random legal
/// column, otherwise run the search.
pub fn select_move_with<R: Rng>(
    search: &MinimaxSearch,
    random_chance: f64,
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<usize, SearchError> {
    let legal = board.legal_moves();
    if legal.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    if random_chance > 0.0 && rng.random::<f64>() < random_chance {
        return Ok(legal[rng.random_range(0..legal.len())]);
    }
    search.best_move(board, player).map(|outcome| outcome.column)
}

/// Minimax agent that applies the difficulty's randomisation.
pub struct MinimaxAgent {
    search: MinimaxSearch,
    random_chance: f64,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(config: &SearchConfig, weights: HeuristicWeights) -> Self {
        Self::with_rng(config, weights, StdRng::from_os_rng())
    }

    /// Reproducible agent: the random-move rolls are driven by `seed`.
    pub fn with_seed(config: &SearchConfig, weights: HeuristicWeights, seed: u64) -> Self {
        Self::with_rng(config, weights, StdRng::seed_from_u64(seed))
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(&SearchConfig::for_difficulty(difficulty), HeuristicWeights::default())
    }

    fn with_rng(config: &SearchConfig, weights: HeuristicWeights, rng: StdRng) -> Self {
        MinimaxAgent {
            search: MinimaxSearch::with_weights(config.depth, weights),
            random_chance: config.random_chance,
            rng,
        }
    }

    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        select_move_with(&self.search, self.random_chance, board, player, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
