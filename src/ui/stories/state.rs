//! State for the story list.

use crate::stories::Story;
use crate::ui::mvi::UiState;

/// Current stories and fetch flags.
///
/// After any completed transition `is_loading` and `is_error` are never
/// both true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl UiState for StoriesState {}

impl StoriesState {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_idle() {
        let state = StoriesState::default();
        assert!(state.is_empty());
        assert!(!state.is_loading);
        assert!(!state.is_error);
    }
}
