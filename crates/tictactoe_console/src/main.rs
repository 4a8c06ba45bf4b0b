//! Two-player tic-tac-toe in the terminal.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_console::{Console, ConsoleError, GameConfig, GameController};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = if cli.no_guide {
        config.with_show_guide(false)
    } else {
        config
    };

    initialize_tracing(config.log_filter());

    let mut controller = GameController::new(Console::stdio(), config);
    match controller.run() {
        Ok(summary) => {
            info!(?summary, "Goodbye");
            Ok(())
        }
        Err(ConsoleError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Logs to stderr so diagnostics never mix with the game on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
