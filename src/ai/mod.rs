mod agent;
mod difficulty;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::{Difficulty, SearchConfig};
pub use heuristic::{Heuristic, HeuristicWeights, WindowHeuristic};
pub use minimax::{select_move_with, MinimaxAgent, MinimaxSearch, SearchOutcome, WIN_SCORE};
pub use random::RandomAgent;
