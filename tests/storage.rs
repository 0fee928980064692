use std::fs;

use hacker_stories::storage::{FileStore, KeyValueStore, StorageError, SEARCH_TERM_KEY};
use tempfile::TempDir;

#[test]
fn missing_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("storage.toml")).unwrap();
    assert!(store.get(SEARCH_TERM_KEY).is_none());
}

#[test]
fn set_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.toml");

    let mut store = FileStore::open(&path).unwrap();
    store.set(SEARCH_TERM_KEY, "Rust").unwrap();
    store.set(SEARCH_TERM_KEY, "Rust async").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(SEARCH_TERM_KEY).as_deref(), Some("Rust async"));
}

#[test]
fn empty_value_is_stored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.toml");

    let mut store = FileStore::open(&path).unwrap();
    store.set(SEARCH_TERM_KEY, "").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(SEARCH_TERM_KEY).as_deref(), Some(""));
}

#[test]
fn creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("storage.toml");

    let mut store = FileStore::open(&path).unwrap();
    store.set(SEARCH_TERM_KEY, "React").unwrap();

    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn file_is_plain_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.toml");
    fs::write(&path, "search = \"Redux\"\n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(SEARCH_TERM_KEY).as_deref(), Some("Redux"));
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.toml");
    fs::write(&path, "search = [unterminated").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Parse { .. }), "got {err:?}");
}
