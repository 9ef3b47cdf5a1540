//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Text blackjack for several players against one dealer"
)]
pub struct BlackjackCli {
    /// Defaults to `play` when omitted
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session
    Play {
        /// Number of players; asked for when not set
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=crate::commands::MAX_PLAYERS as i64))]
        players: Option<u32>,
        /// Number of decks in the shoe (capped at 10); asked for when not set
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        decks: Option<u32>,
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
