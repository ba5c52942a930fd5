//! Client configuration
//!
//! Covers everything the session needs to talk to the outside world: the API
//! base URL, the optional session token, the favorites cache location and the
//! push retry policy. Loaded from a TOML file when one exists, otherwise the
//! defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cache file name under the platform data directory
const CACHE_FILENAME: &str = "favorites.json";

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ClientConfig {
    /// Base URL of the mentor directory API
    pub api_base_url: String,

    /// Session token for authenticated requests. None for anonymous sessions;
    /// favorites are then local-only.
    pub auth_token: Option<String>,

    /// Path of the local favorites cache file
    pub cache_path: PathBuf,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum attempts for pushing a favorites delta to the server
    pub push_retry_limit: u32,

    /// Optional maintenance notice surfaced to the user at startup
    pub maintenance_message: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001".to_string(),
            auth_token: None,
            cache_path: default_cache_path(),
            request_timeout_secs: 10,
            push_retry_limit: 3,
            maintenance_message: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned so a fresh
    /// install works without any setup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Whether an authenticated session exists
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Default favorites cache location under the platform data directory
fn default_cache_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("mentor-client").join(CACHE_FILENAME))
        .unwrap_or_else(|| PathBuf::from(CACHE_FILENAME))
}
