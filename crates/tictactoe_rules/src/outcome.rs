//! How a round ended.

use crate::Mark;

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The board filled with no line completed.
    Tie,
}
