//! Tic-tac-toe against a minimax computer opponent
//!
//! This crate provides:
//! - A 3x3 board implementation with move validation
//! - Bounded-depth minimax move search with a heuristic fallback
//! - Difficulty scaling via search-depth reduction
//! - An interactive game, position analysis, and random-opponent selfplay
//!   exposed through the `oxo` binary

pub mod cli;
pub mod engine;
pub mod error;
pub mod game;

pub use engine::{
    Board, CELL_WEIGHTS, Cell, Difficulty, Mark, SCORE_BOUND, WIN_SCORE, WINNING_LINES,
    computer_move, evaluate, has_won, move_search, winning_moves,
};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
