//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. They are kept apart from board
//! storage so the same checks serve both `Board` methods and tests.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_COMBINATIONS, check_winner};
