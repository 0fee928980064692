//! Key-value persistence for small UI preferences.
//!
//! Only one key is used today: the last search term, so a restart comes
//! back to the same query.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the last search term.
pub const SEARCH_TERM_KEY: &str = "search";

/// String key-value store.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
