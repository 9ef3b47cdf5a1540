//! # Blackjack CLI Library
//!
//! Command-line interface for the blackjack engine: an interactive session
//! for several players against one dealer, plus a `cfg` command that shows
//! the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, reads answers from stdin, and
//! returns the process exit code. [`run_with_input`] does the same with an
//! injected input stream.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! // one player stands, then declines another round
//! let mut input = Cursor::new(b"n\nn\n");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = blackjack_cli::run_with_input(
//!     ["blackjack", "play", "--players", "1", "--decks", "2", "--seed", "42"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play` (default): Play an interactive session
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_play_command};

pub use commands::MAX_PLAYERS;
pub use error::CliError;

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Parses `args` and dispatches to the command handler, reading interactive
/// answers from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    tracing::debug!(
        players = ?resolved.config.players,
        decks = ?resolved.config.decks,
        seed = ?resolved.config.seed,
        "resolved configuration"
    );

    let result = match cli.cmd {
        Some(Commands::Cfg) => handle_cfg_command(&resolved, out),
        Some(Commands::Play {
            players,
            decks,
            seed,
        }) => resolved
            .with_cli(players, decks, seed)
            .map_err(CliError::from)
            .and_then(|r| {
                let config = r.config;
                handle_play_command(config.players, config.decks, config.seed, out, err, stdin)
            }),
        None => {
            let config = resolved.config;
            handle_play_command(config.players, config.decks, config.seed, out, err, stdin)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
