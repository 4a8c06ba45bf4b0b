//! Two-player tic-tac-toe for the text console.
//!
//! # Architecture
//!
//! - **Io**: the [`LineIo`] capability every prompt goes through
//! - **Player**: a name, a mark, and move input
//! - **Controller**: the session state machine (ready check, rounds, replay)
//! - **Config**: optional TOML settings
//!
//! Board rules live in the `tictactoe_rules` crate.
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{GameConfig, GameController, ScriptedIo};
//!
//! let io = ScriptedIo::new(["y", "ann", "bo", "1", "4", "2", "5", "3", "n"]);
//! let mut controller = GameController::new(io, GameConfig::default());
//! let summary = controller.run().unwrap();
//! assert_eq!(*summary.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod io;
mod player;
mod prompt;

pub use config::{ConfigError, GameConfig};
pub use controller::{GUIDE, GameController, Phase, READY_PROMPT, REPLAY_PROMPT, SessionSummary};
pub use io::{Console, ConsoleError, LineIo, ScriptedIo, show_board};
pub use player::{Player, capitalize_name, parse_position_input};
pub use prompt::{Answer, InvalidResponse, ask_yes_no};

// Rule types used in this crate's public API.
pub use tictactoe_rules::{Board, InvalidMove, Mark, Position, RoundOutcome, Square};
