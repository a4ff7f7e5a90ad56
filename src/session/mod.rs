//! Explicit session objects for a human-vs-AI game: board, move history and
//! running statistics. Nothing here is global.

mod game;
mod stats;

pub use game::{GameSession, SavedGame};
pub use stats::SessionStats;
