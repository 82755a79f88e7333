//! Configuration file loading for the `chess-board` tool.
//!
//! Settings come from an optional TOML file. Command-line arguments
//! override whatever the file provides.

use chess_board::STARTPOS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for the `chess-board` tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Position shown when no FEN is given on the command line.
    /// Defaults to the standard starting position.
    #[serde(default = "default_fen")]
    pub default_fen: String,
    /// Print the re-encoded placement field after the board.
    #[serde(default)]
    pub encode: bool,
}

fn default_fen() -> String {
    STARTPOS.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            default_fen: default_fen(),
            encode: false,
        }
    }
}

impl BoardConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path, `chess-board.toml` in
    /// the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-board.toml")
    }
}
