//! Play configuration for the command-line driver.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Mark chosen on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Play X (moves first).
    #[display("x")]
    X,
    /// Play O (moves second).
    #[display("o")]
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

/// Which computer player to face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// Exhaustive minimax; never loses.
    #[display("minimax")]
    Minimax,
    /// Takes the first empty cell in row-major order.
    #[display("first-available")]
    FirstAvailable,
}

/// Configuration for a human-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark played by the human.
    #[serde(default = "default_human")]
    human: Side,

    /// Show the engine's suggested move before each human turn.
    #[serde(default)]
    hints: bool,

    /// Computer opponent.
    #[serde(default = "default_opponent")]
    opponent: OpponentKind,
}

#[instrument]
fn default_human() -> Side {
    Side::X
}

#[instrument]
fn default_opponent() -> OpponentKind {
    OpponentKind::Minimax
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            hints: false,
            opponent: default_opponent(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when given, otherwise falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human: Option<Side>, hints: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.hints |= hints;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
