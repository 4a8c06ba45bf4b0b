//! Yes/no questions.

use crate::io::{ConsoleError, LineIo};
use derive_more::Display;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Accepted answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Answer {
    /// `Y`
    #[strum(serialize = "Y")]
    Yes,
    /// `N`
    #[strum(serialize = "N")]
    No,
}

/// A response to a yes/no question that was neither `Y` nor `N`.
///
/// Holds the response as normalized (trimmed, upper-cased).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid answer: {}", _0)]
pub struct InvalidResponse(pub String);

impl std::error::Error for InvalidResponse {}

impl Answer {
    /// Parses a response case-insensitively, ignoring surrounding whitespace.
    pub fn parse(response: &str) -> Result<Self, InvalidResponse> {
        let normalized = response.trim().to_uppercase();
        Answer::from_str(&normalized).map_err(|_| InvalidResponse(normalized))
    }
}

/// Asks `question` until the response is `Y` or `N`.
///
/// Each rejected response is reported and the same question is asked again.
#[instrument(skip(io))]
pub fn ask_yes_no<I: LineIo + ?Sized>(io: &mut I, question: &str) -> Result<Answer, ConsoleError> {
    loop {
        let response = io.ask(question)?;
        match Answer::parse(&response) {
            Ok(answer) => {
                debug!(%answer, "Answer accepted");
                return Ok(answer);
            }
            Err(invalid) => {
                debug!(response = %invalid.0, "Answer rejected");
                io.write_line(&invalid.to_string())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedIo;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Answer::parse("y"), Ok(Answer::Yes));
        assert_eq!(Answer::parse(" Y "), Ok(Answer::Yes));
        assert_eq!(Answer::parse("n"), Ok(Answer::No));
        assert_eq!(Answer::parse("N\t"), Ok(Answer::No));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for response in ["", "yes", "no", "maybe", "q", "YN"] {
            assert_eq!(
                Answer::parse(response),
                Err(InvalidResponse(response.trim().to_uppercase())),
                "{response:?}"
            );
        }
    }

    #[test]
    fn test_ask_repeats_once_per_invalid_response() {
        let mut io = ScriptedIo::new(["maybe", "yes", "", "y"]);
        let answer = ask_yes_no(&mut io, "Ready?").unwrap();

        assert_eq!(answer, Answer::Yes);
        assert_eq!(io.count("Ready?"), 4);
        assert_eq!(io.count("Invalid answer: MAYBE"), 1);
        assert_eq!(io.count("Invalid answer: YES"), 1);
        assert_eq!(io.count("Invalid answer: "), 1);
    }

    #[test]
    fn test_ask_fails_when_input_closes() {
        let mut io = ScriptedIo::new(["x"]);
        let result = ask_yes_no(&mut io, "Ready?");
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }
}
