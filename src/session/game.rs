use crate::ai::{Agent, Difficulty, HeuristicWeights, MinimaxAgent, MinimaxSearch, SearchConfig};
use crate::api::apply_move;
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{Board, GameResult, Player};

use super::stats::SessionStats;

/// Serializable snapshot of a session's current game. The board is rebuilt
/// by replaying `moves`, so a snapshot can never hold an unreachable position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedGame {
    pub moves: Vec<usize>,
    pub human: Player,
    pub difficulty: Difficulty,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A human-vs-AI game plus the statistics of every game finished in this
/// session. Red always moves first.
pub struct GameSession {
    board: Board,
    history: Vec<usize>,
    human: Player,
    difficulty: Difficulty,
    search_config: SearchConfig,
    weights: HeuristicWeights,
    ai: MinimaxAgent,
    stats: SessionStats,
}

impl GameSession {
    pub fn new(config: &AppConfig, difficulty: Difficulty, human: Player) -> Self {
        let search_config = config.search_config(difficulty).clone();
        let ai = MinimaxAgent::new(&search_config, config.heuristic.clone());
        Self::with_agent(config, difficulty, human, search_config, ai)
    }

    /// Session whose AI randomisation is reproducible.
    pub fn with_seed(config: &AppConfig, difficulty: Difficulty, human: Player, seed: u64) -> Self {
        let search_config = config.search_config(difficulty).clone();
        let ai = MinimaxAgent::with_seed(&search_config, config.heuristic.clone(), seed);
        Self::with_agent(config, difficulty, human, search_config, ai)
    }

    fn with_agent(
        config: &AppConfig,
        difficulty: Difficulty,
        human: Player,
        search_config: SearchConfig,
        ai: MinimaxAgent,
    ) -> Self {
        GameSession {
            board: Board::new(),
            history: Vec::new(),
            human,
            difficulty,
            search_config,
            weights: config.heuristic.clone(),
            ai,
            stats: SessionStats::new(),
        }
    }

    /// Rebuild a session from a snapshot by replaying its moves.
    pub fn restore(saved: SavedGame, config: &AppConfig) -> Result<Self, SessionError> {
        let mut session = Self::new(config, saved.difficulty, saved.human);
        for col in saved.moves {
            session.play(col)?;
        }
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn ai_player(&self) -> Player {
        self.human.other()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    pub fn to_move(&self) -> Player {
        self.board.next_player()
    }

    /// Play the human's move.
    pub fn play_human(&mut self, column: usize) -> Result<GameResult, SessionError> {
        self.ensure_turn(self.human)?;
        self.play(column)
    }

    /// Let the AI choose and play its move.
    pub fn play_ai(&mut self) -> Result<(usize, GameResult), SessionError> {
        let ai = self.ai_player();
        self.ensure_turn(ai)?;
        let column = self.ai.select_move(&self.board, ai)?;
        let result = self.play(column)?;
        Ok((column, result))
    }

    /// Best column for the human at this session's search depth, without
    /// randomisation.
    pub fn hint(&self) -> Result<usize, SessionError> {
        self.ensure_turn(self.human)?;
        let search = MinimaxSearch::with_weights(self.search_config.depth, self.weights.clone());
        Ok(search.best_move(&self.board, self.human)?.column)
    }

    /// Take back the human's last move and any AI reply after it. Finished
    /// games cannot be undone, and neither can an AI opening with no human
    /// move behind it. Returns how many moves were removed.
    pub fn undo(&mut self) -> usize {
        if self.result().is_terminal() {
            return 0;
        }
        // Red plays the even plies
        let human_parity = if self.human == Player::Red { 0 } else { 1 };
        let last_human = (0..self.history.len())
            .rev()
            .find(|i| i % 2 == human_parity);
        let Some(last_human) = last_human else {
            return 0;
        };
        let removed = self.history.len() - last_human;
        for col in self.history.drain(last_human..).rev() {
            self.board.lift_piece(col);
        }
        removed
    }

    /// Start over with an empty board, keeping the statistics.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            moves: self.history.clone(),
            human: self.human,
            difficulty: self.difficulty,
        }
    }

    fn ensure_turn(&self, player: Player) -> Result<(), SessionError> {
        if self.result().is_terminal() {
            return Err(SessionError::GameOver);
        }
        if self.to_move() != player {
            return Err(SessionError::NotYourTurn(player));
        }
        Ok(())
    }

    /// Apply a drop for whoever is to move and record a finished game once.
    fn play(&mut self, column: usize) -> Result<GameResult, SessionError> {
        if self.result().is_terminal() {
            return Err(SessionError::GameOver);
        }
        let (board, result) = apply_move(&self.board, column, self.to_move())?;
        self.board = board;
        self.history.push(column);
        if result.is_terminal() {
            self.stats.record(result, self.human);
        }
        Ok(result)
    }
}
