//! # Minimax Connect Four
//!
//! The rules and AI opponent of a Connect Four game, independent of any user
//! interface. Callers mutate a [`game::Board`] with player moves and ask the
//! search engine for the computer's reply.
//!
//! ## Modules
//!
//! - [`game`]: Board model: gravity drops, legal moves, win/draw detection
//! - [`ai`]: Minimax search with alpha-beta pruning, heuristic, difficulty levels
//! - [`api`]: The `apply_move` / `choose_ai_move` entry points
//! - [`session`]: Human-vs-AI session: history, undo, hints, statistics, snapshots
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod api;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use api::{apply_move, choose_ai_move, choose_ai_move_with};
