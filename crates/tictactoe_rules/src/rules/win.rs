//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 lines that win a round: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::BottomLeft, Position::Center, Position::TopRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if one mark fills a whole line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_COMBINATIONS.iter().find_map(|&[a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Square::Occupied(m1), Square::Occupied(m2), Square::Occupied(m3))
                if m1 == m2 && m2 == m3 =>
            {
                Some(m1)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut squares = [Square::Empty; 9];
        for &(pos, mark) in marks {
            squares[pos.to_index()] = Square::Occupied(mark);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomCenter, Mark::O),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::BottomLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::TopRight, Mark::O),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_combination_wins_for_both_marks() {
        for line in WINNING_COMBINATIONS {
            for mark in [Mark::X, Mark::O] {
                let marks: Vec<_> = line.iter().map(|&pos| (pos, mark)).collect();
                assert_eq!(check_winner(&board_with(&marks)), Some(mark), "{line:?}");
            }
        }
    }
}
