//! Reducer for the story list.

use crate::ui::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::StoriesState;

/// Reducer for story list transitions.
///
/// Pure function. Fetching, persistence and history bookkeeping happen in
/// `App` around the dispatch call.
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchInit => StoriesState {
                is_loading: true,
                is_error: false,
                ..state
            },

            StoriesIntent::FetchSuccess { stories } | StoriesIntent::LoadPrevious { stories } => {
                StoriesState {
                    data: stories,
                    is_loading: false,
                    is_error: false,
                }
            }

            StoriesIntent::FetchFailure => StoriesState {
                is_loading: false,
                is_error: true,
                ..state
            },

            StoriesIntent::RemoveStory { story } => {
                let mut data = state.data;
                if let Some(index) = data.iter().position(|s| s.object_id == story.object_id) {
                    data.remove(index);
                }
                StoriesState {
                    data,
                    is_loading: false,
                    is_error: false,
                }
            }
        }
    }
}
