use crate::stories::Story;
use crate::ui::mvi::UiState;

/// A past search and the stories it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousSearch {
    pub term: String,
    pub result: Vec<Story>,
}

/// Most recent first. Terms may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryState {
    pub entries: Vec<PreviousSearch>,
    /// Cursor in the history popup.
    pub selected: usize,
}

impl UiState for HistoryState {}

impl HistoryState {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&PreviousSearch> {
        self.entries.get(index)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.term.as_str())
    }
}
