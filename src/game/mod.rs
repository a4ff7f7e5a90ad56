//! Core Connect Four game logic: board representation, players, and the
//! derived game result.

mod board;
mod player;
mod result;

pub use board::{windows, Board, Cell, Window, CENTER_COL, COLS, CONNECT, ROWS};
pub use player::Player;
pub use result::GameResult;
