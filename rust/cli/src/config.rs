//! Session configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, a TOML
//! file named by `BLACKJACK_CONFIG`, `BLACKJACK_*` environment variables,
//! and finally command-line flags. A value left unset is asked for at the
//! prompt.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub players: Option<u32>,
    pub decks: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of the resolved values.
    pub fn with_cli(
        mut self,
        players: Option<u32>,
        decks: Option<u32>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = players {
            self.config.players = Some(v);
            self.sources.players = ValueSource::Cli;
        }
        if let Some(v) = decks {
            self.config.decks = Some(v);
            self.sources.decks = ValueSource::Cli;
        }
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration using `lookup` for environment variables.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = Some(v);
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = Some(v);
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(players) = lookup("BLACKJACK_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = Some(
            players
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid players".into()))?,
        );
        sources.players = ValueSource::Env;
    }
    if let Some(decks) = lookup("BLACKJACK_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = Some(
            decks
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?,
        );
        sources.decks = ValueSource::Env;
    }
    if let Some(seed) = lookup("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<u32>,
    #[serde(default)]
    decks: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == Some(0) {
        return Err(ConfigError::Invalid("players must be >=1".into()));
    }
    if cfg.decks == Some(0) {
        return Err(ConfigError::Invalid("decks must be >=1".into()));
    }
    Ok(())
}
