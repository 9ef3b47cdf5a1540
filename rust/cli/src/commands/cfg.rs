//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays each session setting with
//! its source (default, file, env, or cli).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "decks": {
//!     "value": 6,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command: print the resolved configuration as pretty JSON.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
