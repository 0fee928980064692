use crate::ui::mvi::IntentObserver;

use super::intent::StoriesIntent;
use super::reducer::StoriesReducer;
use super::state::StoriesState;

/// Logs every story intent at debug level.
///
/// Payloads are summarized by count; story lists can be long.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl IntentObserver<StoriesReducer> for TracingObserver {
    fn observe(&self, intent: &StoriesIntent, before: &StoriesState) {
        let payload = match intent {
            StoriesIntent::FetchSuccess { stories } | StoriesIntent::LoadPrevious { stories } => {
                stories.len()
            }
            StoriesIntent::RemoveStory { .. } => 1,
            StoriesIntent::FetchInit | StoriesIntent::FetchFailure => 0,
        };
        tracing::debug!(
            action = intent.kind().as_str(),
            payload,
            stories = before.data.len(),
            loading = before.is_loading,
            error = before.is_error,
            "Dispatching stories intent"
        );
    }
}
