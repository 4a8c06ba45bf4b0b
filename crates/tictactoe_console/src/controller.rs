//! Session orchestration: setup, rounds and replay.

use crate::config::GameConfig;
use crate::io::{ConsoleError, LineIo, show_board};
use crate::player::Player;
use crate::prompt::{Answer, ask_yes_no};
use derive_getters::Getters;
use tictactoe_rules::{Board, Mark, RoundOutcome};
use tracing::{debug, info, instrument};

/// Rules banner shown before the ready check.
pub const GUIDE: &str = "\
----------------     1 | 2 | 3
TIC - TAC - TOE      4 | 5 | 6
________________     7 | 8 | 9

TO WIN AT TIC - TAC - TOE,
YOU NEED TO GET THREE PLAYER SIGNS IN A ROW,
THREE IN A COLUMN, OR THREE DIAGONALLY

PLAYER ONE SIGN: 'X', PLAYER TWO SIGN: 'O'.

YOU CAN PLACE YOUR SIGN IN ANY POSITION BETWEEN
1 TO 9.
";

/// Question asked once before players are created.
pub const READY_PROMPT: &str = "Are you ready? Enter 'Y' for yes or 'N' for no";

/// Question asked after every round.
pub const REPLAY_PROMPT: &str = "Wanna play again? Enter 'Y' for yes or 'N' for no";

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Phase {
    /// Showing the guide.
    Setup,
    /// Waiting for the players to confirm they are ready.
    ReadyCheck,
    /// A round is being played.
    Playing,
    /// A round just ended.
    RoundOver(RoundOutcome),
    /// Waiting to hear whether to play another round.
    ReplayCheck,
    /// The session is over.
    Terminated,
}

/// Tally of the rounds played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds finished.
    rounds: u32,
    /// Rounds won by the `X` player.
    x_wins: u32,
    /// Rounds won by the `O` player.
    o_wins: u32,
    /// Rounds that ended in a tie.
    ties: u32,
}

impl SessionSummary {
    /// Counts a finished round.
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        match outcome {
            RoundOutcome::Winner(Mark::X) => self.x_wins += 1,
            RoundOutcome::Winner(Mark::O) => self.o_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }
}

/// Drives a whole session over a [`LineIo`].
///
/// Owns the board, both players and the tally. Players are created once,
/// after the ready check, and keep their names and marks across replays.
#[derive(Debug)]
pub struct GameController<I> {
    io: I,
    config: GameConfig,
    board: Board,
    players: Option<[Player; 2]>,
    phase: Phase,
    summary: SessionSummary,
}

impl<I: LineIo> GameController<I> {
    /// Creates a controller in the [`Phase::Setup`] phase.
    pub fn new(io: I, config: GameConfig) -> Self {
        Self {
            io,
            config,
            board: Board::new(),
            players: None,
            phase: Phase::Setup,
            summary: SessionSummary::default(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, once created. Index 0 holds `X` and moves first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Rounds tallied so far.
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// The I/O the session runs on.
    pub fn io(&self) -> &I {
        &self.io
    }

    /// Consumes the controller, returning its I/O.
    pub fn into_io(self) -> I {
        self.io
    }

    /// Runs the session until it terminates and returns the tally.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        info!("Session started");
        while self.phase != Phase::Terminated {
            self.step()?;
        }
        self.write_final_score()?;
        info!(rounds = self.summary.rounds, "Session ended");
        Ok(self.summary)
    }

    /// Performs one transition and returns the new phase.
    pub fn step(&mut self) -> Result<Phase, ConsoleError> {
        let next = match self.phase {
            Phase::Setup => {
                if *self.config.show_guide() {
                    self.io.write_line(GUIDE)?;
                }
                Phase::ReadyCheck
            }
            Phase::ReadyCheck => match ask_yes_no(&mut self.io, READY_PROMPT)? {
                Answer::Yes => {
                    self.setup_players()?;
                    Phase::Playing
                }
                Answer::No => Phase::Terminated,
            },
            Phase::Playing => match &self.players {
                Some(players) => Phase::RoundOver(play_round(&mut self.io, &mut self.board, players)?),
                None => Phase::ReadyCheck,
            },
            Phase::RoundOver(outcome) => {
                self.summary.record(outcome);
                self.board.reset();
                show_board(&mut self.io, &self.board)?;
                Phase::ReplayCheck
            }
            Phase::ReplayCheck => match ask_yes_no(&mut self.io, REPLAY_PROMPT)? {
                Answer::Yes => Phase::Playing,
                Answer::No => Phase::Terminated,
            },
            Phase::Terminated => Phase::Terminated,
        };
        debug!(from = %self.phase, to = %next, "Phase transition");
        self.phase = next;
        Ok(next)
    }

    fn setup_players(&mut self) -> Result<(), ConsoleError> {
        let first = Player::create(&mut self.io, Mark::X, 1)?;
        let second = Player::create(&mut self.io, Mark::O, 2)?;
        self.io.write_line(&format!(
            "Alright! It's {} against {}. lets roll!",
            first.name(),
            second.name()
        ))?;
        self.players = Some([first, second]);
        Ok(())
    }

    fn write_final_score(&mut self) -> Result<(), ConsoleError> {
        let Some([first, second]) = &self.players else {
            return Ok(());
        };
        if self.summary.rounds == 0 {
            return Ok(());
        }
        self.io.write_line(&format!(
            "Final score after {} round(s): {} {} - {} {}, ties {}",
            self.summary.rounds,
            first.name(),
            self.summary.wins(*first.mark()),
            self.summary.wins(*second.mark()),
            second.name(),
            self.summary.ties
        ))
    }
}

/// Plays one round, the first player always moving first.
#[instrument(skip_all)]
fn play_round<I: LineIo + ?Sized>(
    io: &mut I,
    board: &mut Board,
    players: &[Player; 2],
) -> Result<RoundOutcome, ConsoleError> {
    loop {
        for player in players {
            player.take_turn(io, board)?;
            match board.outcome() {
                Some(outcome @ RoundOutcome::Winner(_)) => {
                    io.write_line(&format!("{} wins!", player.name()))?;
                    info!(winner = %player.name(), "Round won");
                    return Ok(outcome);
                }
                Some(RoundOutcome::Tie) => {
                    io.write_line("It's a tie")?;
                    info!("Round tied");
                    return Ok(RoundOutcome::Tie);
                }
                None => {}
            }
        }
    }
}
