//! Static positional evaluation
//!
//! Each cell is weighted by the number of winning lines passing through it:
//! corners 3, edge midpoints 2, center 4. Human-held cells count positively,
//! computer-held cells negatively.

use super::{Board, Cell};

/// Positional weight of each cell, row-major
pub const CELL_WEIGHTS: [i32; 9] = [3, 2, 3, 2, 4, 2, 3, 2, 3];

/// Score a non-terminal position by summing cell weights.
///
/// Only consulted when the search depth budget runs out before a terminal
/// state is reached.
pub fn evaluate(board: &Board) -> i32 {
    board
        .cells
        .iter()
        .zip(CELL_WEIGHTS)
        .map(|(&cell, weight)| match cell {
            Cell::Human => weight,
            Cell::Computer => -weight,
            Cell::Empty => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Mark, lines::WINNING_LINES};

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_weights_count_lines_through_each_cell() {
        for pos in 0..9 {
            let lines_through = WINNING_LINES
                .iter()
                .filter(|line| line.contains(&pos))
                .count();
            assert_eq!(CELL_WEIGHTS[pos], lines_through as i32, "cell {pos}");
        }
    }

    #[test]
    fn test_sign_convention() {
        let mut board = Board::new();
        board.place(1, 1, Mark::Human).unwrap();
        assert_eq!(evaluate(&board), 4);

        board.reset();
        board.place(0, 0, Mark::Computer).unwrap();
        assert_eq!(evaluate(&board), -3);
    }

    #[test]
    fn test_mirrored_occupation_cancels() {
        let mut board = Board::new();
        board.place(0, 0, Mark::Human).unwrap();
        board.place(2, 2, Mark::Computer).unwrap();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_full_board_sum() {
        // Human on center and corners (16), computer on the edges (8)
        let board = Board::from_string("XOXOXOXOX").unwrap();
        assert_eq!(evaluate(&board), 8);
    }
}
