//! Errors raised by board operations.

use crate::Position;

/// A move the board refuses.
///
/// Both cases leave the board unchanged; the caller asks the same player
/// for another square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The number is not one of 1-9.
    #[display("Position {} is outside 1 - 9", _0)]
    OutOfRange(i64),

    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
}

impl std::error::Error for InvalidMove {}
