//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move out of range: row {row}, column {column} (both must be 0-2)")]
    MoveOutOfRange { row: usize, column: usize },

    #[error("cell at row {row}, column {column} is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error(
        "invalid piece counts: human={human}, computer={computer} (the human opens, so the human count must equal the computer count or lead by 1)"
    )]
    InvalidPieceCounts { human: usize, computer: usize },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
