//! Configuration management for listkeeper.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::DEFAULT_MAX_SESSIONS;
use crate::store::{DuplicateScope, StoreOptions, ToggleMode};

const ENV_HOST: &str = "LISTKEEPER_HOST";
const ENV_PORT: &str = "LISTKEEPER_PORT";
const ENV_SESSION_TTL: &str = "LISTKEEPER_SESSION_TTL_SECS";
const ENV_MAX_SESSIONS: &str = "LISTKEEPER_MAX_SESSIONS";
const ENV_TOGGLE_MODE: &str = "LISTKEEPER_TOGGLE_MODE";
const ENV_RENAME_SCOPE: &str = "LISTKEEPER_RENAME_SCOPE";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Seconds of inactivity before a session and its lists are dropped.
    pub session_ttl_secs: u64,
    /// Live sessions kept before the least recently seen one is evicted.
    pub max_sessions: usize,
    /// Store behaviour switches.
    pub store: StoreOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4567,
            session_ttl_secs: 30 * 60,
            max_sessions: DEFAULT_MAX_SESSIONS,
            store: StoreOptions::default(),
        }
    }
}

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply environment variable overrides. Unparseable values are logged
    /// and ignored.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var(ENV_HOST) {
            self.host = host;
        }

        if let Some(port) = var(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", ENV_PORT, port),
            }
        }

        if let Some(ttl) = var(ENV_SESSION_TTL) {
            match ttl.parse() {
                Ok(ttl) => self.session_ttl_secs = ttl,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", ENV_SESSION_TTL, ttl),
            }
        }

        if let Some(max) = var(ENV_MAX_SESSIONS) {
            match max.parse::<usize>() {
                Ok(max) if max > 0 => self.max_sessions = max,
                _ => tracing::warn!("Ignoring invalid {}: {}", ENV_MAX_SESSIONS, max),
            }
        }

        if let Some(mode) = var(ENV_TOGGLE_MODE) {
            match ToggleMode::from_str(&mode) {
                Some(mode) => self.store.toggle_mode = mode,
                None => tracing::warn!("Ignoring invalid {}: {}", ENV_TOGGLE_MODE, mode),
            }
        }

        if let Some(scope) = var(ENV_RENAME_SCOPE) {
            match DuplicateScope::from_str(&scope) {
                Some(scope) => self.store.rename_scope = scope,
                None => tracing::warn!("Ignoring invalid {}: {}", ENV_RENAME_SCOPE, scope),
            }
        }
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
