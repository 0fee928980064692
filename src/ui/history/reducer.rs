use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::state::{HistoryState, PreviousSearch};
use crate::ui::mvi::Reducer;

/// Maximum number of remembered searches.
pub const MAX_ENTRIES: usize = 5;

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryState;
    type Intent = HistoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::Record { term, stories } => {
                let mut entries = state.entries;
                entries.insert(
                    0,
                    PreviousSearch {
                        term,
                        result: stories,
                    },
                );
                entries.truncate(MAX_ENTRIES);
                HistoryState {
                    entries,
                    selected: 0,
                }
            }
            HistoryIntent::MoveUp => {
                let selected = if state.selected == 0 {
                    state.entries.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                HistoryState { selected, ..state }
            }
            HistoryIntent::MoveDown => {
                let selected = if state.selected + 1 >= state.entries.len() {
                    0
                } else {
                    state.selected + 1
                };
                HistoryState { selected, ..state }
            }
        }
    }
}
