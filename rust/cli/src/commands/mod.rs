//! Command handler modules for the blackjack CLI.
//!
//! Each command lives in its own module with a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` entry point. Output
//! and input streams are passed in as parameters.

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::{MAX_PLAYERS, handle_play_command};
