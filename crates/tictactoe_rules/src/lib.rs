//! Pure tic-tac-toe rules.
//!
//! The board, its cell addressing and the win/tie checks live here with no
//! knowledge of players, prompts or turn order. The console front end in
//! `tictactoe_console` drives these types.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, Mark, RoundOutcome};
//!
//! let mut board = Board::new();
//! for (position, mark) in [(1, Mark::X), (5, Mark::O), (2, Mark::X), (6, Mark::O), (3, Mark::X)] {
//!     board.place_mark(position, mark).unwrap();
//! }
//! assert_eq!(board.outcome(), Some(RoundOutcome::Winner(Mark::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use error::InvalidMove;
pub use outcome::RoundOutcome;
pub use position::Position;
pub use rules::WINNING_COMBINATIONS;
pub use types::{Board, EMPTY_SYMBOL, Mark, Square};
