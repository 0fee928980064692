use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::DEFAULT_ENDPOINT;
use crate::storage::FileStore;

/// Search term used when nothing has been stored yet.
pub const DEFAULT_TERM: &str = "React";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and what to search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Query URL prefix; the term is appended verbatim.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Term used on first start, before anything is stored.
    #[serde(default = "default_term")]
    pub default_term: String,
}

/// Persistence of the last search term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path. Defaults to the platform data dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_term() -> String {
    DEFAULT_TERM.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_term: default_term(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl StorageConfig {
    /// Configured path, or the platform default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStore::default_path)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
