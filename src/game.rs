//! Game session management: turn order, history, outcome

use serde::{Deserialize, Serialize};

use crate::engine::{Board, Difficulty, Mark, computer_move};

/// A recorded move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

impl Move {
    pub fn row(self) -> usize {
        self.position / 3
    }

    pub fn column(self) -> usize {
        self.position % 3
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// One human-versus-computer session.
///
/// The session owns the board and enforces what the engine deliberately
/// does not: no move lands once an outcome is reached, and the computer is
/// never asked to move on a full board. The human opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a fresh game at the given difficulty
    pub fn new(difficulty: Difficulty) -> Self {
        Game {
            board: Board::new(),
            difficulty,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the human's move at (row, column), each in 0..3.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome exists, and the board's
    /// validation errors for out-of-range or occupied coordinates.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn play_human(&mut self, row: usize, column: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(row, column, Mark::Human)?;
        self.record(Board::index(row, column), Mark::Human);
        Ok(())
    }

    /// Let the engine choose and apply the computer's move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome exists.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn play_computer(&mut self) -> Result<Move, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let depth = self.difficulty.effective_depth(self.board.empty_count());
        let position = computer_move(&mut self.board, depth);
        self.record(position, Mark::Computer);
        Ok(Move {
            position,
            mark: Mark::Computer,
        })
    }

    fn record(&mut self, position: usize, mark: Mark) {
        self.moves.push(Move { position, mark });
        if self.board.has_won(mark) {
            self.outcome = Some(GameOutcome::Win(mark));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }
    }
}
