//! Connection settings and default year window.
//!
//! Values are resolved with the precedence CLI flag > environment variable >
//! config file > built-in default. The config file is JSON:
//!
//! ```json
//! {
//!   "connection": { "uri": "neo4j://127.0.0.1:7687", "database": "mlb" },
//!   "window": { "start": 2020, "end": 2024 }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::YearWindow;
use crate::{MlbError, Result};

pub const URI_ENV_VAR: &str = "MLB_GRAPH_URI";
pub const USER_ENV_VAR: &str = "MLB_GRAPH_USER";
pub const PASSWORD_ENV_VAR: &str = "MLB_GRAPH_PASSWORD";
pub const DATABASE_ENV_VAR: &str = "MLB_GRAPH_DATABASE";

/// Path: ~/.config/mlb-graph/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("mlb-graph").join("config.json")
}

/// Where and how to reach the graph database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            uri: "neo4j://127.0.0.1:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            database: "mlb".to_string(),
        }
    }
}

/// Per-field overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub uri: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl ConnectionOverrides {
    /// Read the `MLB_GRAPH_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            uri: std::env::var(URI_ENV_VAR).ok(),
            user: std::env::var(USER_ENV_VAR).ok(),
            password: std::env::var(PASSWORD_ENV_VAR).ok(),
            database: std::env::var(DATABASE_ENV_VAR).ok(),
        }
    }

    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: ConnectionOverrides) -> Self {
        Self {
            uri: self.uri.or(fallback.uri),
            user: self.user.or(fallback.user),
            password: self.password.or(fallback.password),
            database: self.database.or(fallback.database),
        }
    }
}

impl ConnectionSettings {
    pub fn apply(self, overrides: ConnectionOverrides) -> Self {
        Self {
            uri: overrides.uri.unwrap_or(self.uri),
            user: overrides.user.unwrap_or(self.user),
            password: overrides.password.unwrap_or(self.password),
            database: overrides.database.unwrap_or(self.database),
        }
    }
}

/// Everything read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub connection: ConnectionSettings,
    pub window: YearWindow,
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents).map_err(|e| MlbError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Resolve connection settings: `cli` flags, then the environment, then this file.
    pub fn resolve_connection(&self, cli: ConnectionOverrides) -> ConnectionSettings {
        self.connection
            .clone()
            .apply(cli.or(ConnectionOverrides::from_env()))
    }
}
