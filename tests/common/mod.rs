//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use hacker_stories::search::{SearchApi, SearchError, DEFAULT_ENDPOINT};
use hacker_stories::storage::{KeyValueStore, MemoryStore};
use hacker_stories::stories::Story;
use hacker_stories::ui::app::{App, AppSettings, UiCommand};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use std::collections::HashMap;
use tokio::sync::mpsc;

// -- Story fixtures -----------------------------------------------------------

pub fn story_one() -> Story {
    Story {
        title: "React".to_string(),
        url: "https://reactjs.org/".to_string(),
        author: "Jordan Walke".to_string(),
        num_comments: 3,
        points: 4,
        object_id: 0,
    }
}

pub fn story_two() -> Story {
    Story {
        title: "Redux".to_string(),
        url: "https://redux.js.org/".to_string(),
        author: "Dan Abramov, Andre Clark".to_string(),
        num_comments: 2,
        points: 5,
        object_id: 1,
    }
}

pub fn another_story() -> Story {
    Story {
        title: "JavaScript".to_string(),
        url: "https://en.wikipedia.org/wiki/JavaScript".to_string(),
        author: "Brendan Eich".to_string(),
        num_comments: 15,
        points: 10,
        object_id: 3,
    }
}

pub fn stories() -> Vec<Story> {
    vec![story_one(), story_two()]
}

// -- Search mock --------------------------------------------------------------

/// `SearchApi` answering from a fixed table.
///
/// A term matches an entry when it contains the entry's key; anything else
/// fails with a 500.
#[derive(Default)]
pub struct MockSearch {
    responses: HashMap<String, Vec<Story>>,
    calls: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, stories: Vec<Story>) -> Self {
        self.responses.insert(key.to_string(), stories);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SearchApi for MockSearch {
    async fn search(&self, term: &str) -> Result<Vec<Story>, SearchError> {
        self.calls.lock().push(term.to_string());
        self.responses
            .iter()
            .find(|(key, _)| term.contains(key.as_str()))
            .map(|(_, stories)| stories.clone())
            .ok_or(SearchError::Status(500))
    }
}

// -- App helpers --------------------------------------------------------------

pub fn settings() -> AppSettings {
    AppSettings {
        endpoint: DEFAULT_ENDPOINT.to_string(),
        default_term: "React".to_string(),
        initial_term: None,
    }
}

pub fn make_app() -> App {
    App::new(settings(), Box::new(MemoryStore::new()))
}

/// Build an `App` wired to a command channel.
pub fn make_connected_app(store: MemoryStore) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(settings(), Box::new(store));
    app.set_command_sender(tx);
    (app, rx)
}

/// Run every queued command against `api` and feed the results back.
pub async fn pump(app: &mut App, commands: &mut mpsc::Receiver<UiCommand>, api: &dyn SearchApi) {
    while let Ok(command) = commands.try_recv() {
        match command {
            UiCommand::Search { term } => {
                let result = api.search(&term).await;
                app.on_search_finished(term, result);
            }
        }
    }
}

// -- Rendering helpers --------------------------------------------------------

/// Flatten a buffer into newline-separated rows of text.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width.max(1))
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}
