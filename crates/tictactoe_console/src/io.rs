//! Line-oriented console I/O.
//!
//! Every prompt in the game is one written line answered by one read line.
//! [`LineIo`] is that capability; the controller and players only ever talk
//! to it, so a session can run against the real terminal ([`Console`]) or a
//! recorded script ([`ScriptedIo`]).

use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Stdout, Write};
use tictactoe_rules::Board;
use tracing::{instrument, trace};

/// Failure of the console itself. Ends the session.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The input stream ended while a prompt was waiting.
    #[display("Input closed")]
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Blocking line input and output.
pub trait LineIo {
    /// Reads one line without its terminator. Blocks until one is available.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Writes a prompt, then reads the response.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write_line(prompt)?;
        self.read_line()
    }
}

impl<T: LineIo + ?Sized> LineIo for &mut T {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }
}

/// Renders the board with a blank line before and after it.
pub fn show_board<I: LineIo + ?Sized>(io: &mut I, board: &Board) -> Result<(), ConsoleError> {
    io.write_line("")?;
    io.write_line(&board.to_string())?;
    io.write_line("")
}

/// [`LineIo`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LineIo for Console<R, W> {
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches the prompt as ordinary bad input.
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        trace!(%line, "Line read");
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Scripted [`LineIo`]: replays queued input and records all output.
///
/// Running out of input behaves like a closed terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedIo {
    /// Creates a script that answers prompts with `lines`, in order.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output joined with newlines, as it would appear on screen.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// How many written lines equal `line` exactly.
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl LineIo for ScriptedIo {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.input.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_strips_line_endings() {
        let mut console = Console::new(Cursor::new("y\r\n  bob \n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), "y");
        assert_eq!(console.read_line().unwrap(), "  bob ");
        assert!(matches!(console.read_line(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_console_last_line_without_newline() {
        let mut console = Console::new(Cursor::new("7"), Vec::new());
        assert_eq!(console.read_line().unwrap(), "7");
        assert!(matches!(console.read_line(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_console_ask_writes_prompt() {
        let mut written = Vec::new();
        let mut console = Console::new(Cursor::new("n\n"), &mut written);
        assert_eq!(console.ask("Ready?").unwrap(), "n");
        drop(console);
        assert_eq!(String::from_utf8(written).unwrap(), "Ready?\n");
    }

    #[test]
    fn test_console_reads_invalid_utf8_as_a_line() {
        let mut console = Console::new(Cursor::new(&b"\xff\n5\n"[..]), Vec::new());
        assert_eq!(console.read_line().unwrap(), "\u{FFFD}");
        assert_eq!(console.read_line().unwrap(), "5");
        assert!(matches!(console.read_line(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_show_board_surrounds_with_blank_lines() {
        let mut io = ScriptedIo::default();
        show_board(&mut io, &Board::new()).unwrap();
        assert_eq!(io.output().len(), 3);
        assert_eq!(io.output()[0], "");
        assert_eq!(io.output()[2], "");
        assert_eq!(
            io.transcript(),
            "\n  |   |  \n---------\n  |   |  \n---------\n  |   |  \n"
        );
    }

    #[test]
    fn test_scripted_io_runs_dry() {
        let mut io = ScriptedIo::new(["a"]);
        assert_eq!(io.remaining_input(), 1);
        assert_eq!(io.read_line().unwrap(), "a");
        assert!(matches!(io.read_line(), Err(ConsoleError::InputClosed)));
    }
}
