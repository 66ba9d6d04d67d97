//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A profile created when no players have been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct DefaultProfile {
    /// Display name.
    name: String,
    /// Avatar reference.
    avatar: String,
}

/// Settings for a [`Lobby`](crate::Lobby).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where the JSON player store lives.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Profiles seeded into an empty store.
    #[serde(default = "default_players")]
    default_players: Vec<DefaultProfile>,
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("players.json")
}

#[instrument]
fn default_players() -> Vec<DefaultProfile> {
    vec![
        DefaultProfile::new("Player1".to_string(), "./GIFS/Goku.gif".to_string()),
        DefaultProfile::new("Player2".to_string(), "./GIFS/Vegeta.gif".to_string()),
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_players: default_players(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit values.
    pub fn new(store_path: impl Into<PathBuf>, default_players: Vec<DefaultProfile>) -> Self {
        Self {
            store_path: store_path.into(),
            default_players,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(store_path = %config.store_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
