//! Application configuration: search endpoint, storage location, UI timing.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SearchConfig, StorageConfig, UiConfig, DEFAULT_TERM};
