//! Players and move input.

use crate::io::{ConsoleError, LineIo, show_board};
use derive_getters::Getters;
use derive_new::new;
use tictactoe_rules::{Board, Mark, Position};
use tracing::{debug, info, instrument};

/// One participant: a display name and the mark they place.
///
/// Both are fixed for the whole session, across replays.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name, capitalized.
    name: String,
    /// Mark placed on every turn.
    mark: Mark,
}

impl Player {
    /// Asks for the name of player `number` and creates them with `mark`.
    ///
    /// A blank name falls back to `Player {number}`.
    #[instrument(skip(io))]
    pub fn create<I: LineIo + ?Sized>(
        io: &mut I,
        mark: Mark,
        number: usize,
    ) -> Result<Self, ConsoleError> {
        let response = io.ask(&format!("Player {}: Enter your name", number))?;
        let name = match capitalize_name(&response) {
            name if name.is_empty() => format!("Player {}", number),
            name => name,
        };
        info!(%name, %mark, "Player joined");
        Ok(Self::new(name, mark))
    }

    /// Asks for a square number. Not validated here.
    pub fn choose_position<I: LineIo + ?Sized>(&self, io: &mut I) -> Result<i64, ConsoleError> {
        let response = io.ask(&format!("{}, pick a position from 1 - 9", self.name))?;
        Ok(parse_position_input(&response))
    }

    /// Asks for squares until the board accepts one, then shows the board.
    #[instrument(skip(self, io, board), fields(player = %self.name, mark = %self.mark))]
    pub fn take_turn<I: LineIo + ?Sized>(
        &self,
        io: &mut I,
        board: &mut Board,
    ) -> Result<Position, ConsoleError> {
        loop {
            let choice = self.choose_position(io)?;
            match board.place_mark(choice, self.mark) {
                Ok(pos) => {
                    show_board(io, board)?;
                    return Ok(pos);
                }
                Err(invalid) => {
                    debug!(%invalid, "Move rejected");
                    io.write_line("Invalid entry")?;
                }
            }
        }
    }
}

/// Trims a name and capitalizes it: first letter upper, the rest lower.
pub fn capitalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reads the integer a response starts with.
///
/// An optional sign followed by leading digits is taken; anything after is
/// ignored. A response with no leading integer reads as 0, which no board
/// accepts. Values too large for `i64` saturate.
pub fn parse_position_input(response: &str) -> i64 {
    let trimmed = response.trim();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let magnitude = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    sign * magnitude
}
