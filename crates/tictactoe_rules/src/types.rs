//! Core domain types for tic-tac-toe.

use crate::error::InvalidMove;
use crate::outcome::RoundOutcome;
use crate::position::Position;
use crate::rules;
use std::fmt;
use tracing::{debug, instrument};

/// Character rendered for an unoccupied square, both on a new board and
/// after a reset.
pub const EMPTY_SYMBOL: char = ' ';

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// First mark; its player moves first in every round.
    X,
    /// Second mark.
    O,
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Character shown for this square when the board is rendered.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => EMPTY_SYMBOL,
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order. Externally a square is addressed
/// by the numbers 1-9 shown in the guide; [`Position`] translates those to
/// storage indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from an explicit layout in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` at the square numbered `position` (1-9).
    ///
    /// Fails without touching the board if the number is outside 1-9 or the
    /// square already holds a mark. Returns the square that was marked.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, position: i64, mark: Mark) -> Result<Position, InvalidMove> {
        let pos = Position::from_number(position).ok_or(InvalidMove::OutOfRange(position))?;
        if !self.is_empty(pos) {
            debug!(%pos, "Square already occupied");
            return Err(InvalidMove::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        debug!(%pos, %mark, "Mark placed");
        Ok(pos)
    }

    /// True iff `position` is within 1-9 and that square is unoccupied.
    #[instrument(skip(self))]
    pub fn is_move_valid(&self, position: i64) -> bool {
        Position::from_number(position).is_some_and(|pos| self.is_empty(pos))
    }

    /// True iff every square holds a mark.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff some winning combination is held entirely by one mark.
    #[instrument(skip(self))]
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the mark holding a complete line, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns how the round ended, or `None` while it is still open.
    ///
    /// A win is checked before fullness: a last move that both fills the
    /// board and completes a line is a win.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if let Some(mark) = self.winner() {
            Some(RoundOutcome::Winner(mark))
        } else if self.is_full() {
            Some(RoundOutcome::Tie)
        } else {
            None
        }
    }

    /// Clears every square for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders three rows of `a | b | c` separated by a dashed rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---------")?;
            }
            write!(
                f,
                "{} | {} | {}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_mark_translates_to_zero_index() {
        let mut board = Board::new();
        let pos = board.place_mark(1, Mark::X).unwrap();
        assert_eq!(pos, Position::TopLeft);
        assert_eq!(board.squares()[0], Square::Occupied(Mark::X));

        board.place_mark(9, Mark::O).unwrap();
        assert_eq!(board.squares()[8], Square::Occupied(Mark::O));
    }

    #[test]
    fn test_rejected_move_leaves_board_untouched() {
        let mut board = Board::new();
        board.place_mark(5, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place_mark(5, Mark::O),
            Err(InvalidMove::Occupied(Position::Center))
        );
        assert_eq!(board.place_mark(0, Mark::O), Err(InvalidMove::OutOfRange(0)));
        assert_eq!(board.place_mark(10, Mark::O), Err(InvalidMove::OutOfRange(10)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_render_empty_board() {
        let board = Board::new();
        assert_eq!(
            board.to_string(),
            "  |   |  \n---------\n  |   |  \n---------\n  |   |  "
        );
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.place_mark(1, Mark::X).unwrap();
        board.place_mark(5, Mark::O).unwrap();
        board.place_mark(9, Mark::X).unwrap();
        assert_eq!(
            board.to_string(),
            "X |   |  \n---------\n  | O |  \n---------\n  |   | X"
        );
    }

    #[test]
    fn test_reset_restores_empty_sentinel() {
        let mut board = Board::new();
        for n in 1..=9 {
            board.place_mark(n, Mark::X).unwrap();
        }
        board.reset();
        assert_eq!(board, Board::new());
        assert!(board.squares().iter().all(|sq| sq.symbol() == EMPTY_SYMBOL));
    }
}
