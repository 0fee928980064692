mod common;

use common::{another_story, stories, story_one, story_two};
use hacker_stories::ui::mvi::Reducer;
use hacker_stories::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};

fn state(is_loading: bool, is_error: bool) -> StoriesState {
    StoriesState {
        data: stories(),
        is_loading,
        is_error,
    }
}

#[test]
fn remove_story_drops_only_that_story() {
    let new = StoriesReducer::reduce(
        state(false, false),
        StoriesIntent::RemoveStory { story: story_one() },
    );
    assert_eq!(
        new,
        StoriesState {
            data: vec![story_two()],
            is_loading: false,
            is_error: false,
        }
    );
}

#[test]
fn remove_story_keeps_relative_order() {
    let input = StoriesState {
        data: vec![story_one(), another_story(), story_two()],
        ..StoriesState::default()
    };
    let new = StoriesReducer::reduce(input, StoriesIntent::RemoveStory { story: another_story() });
    let ids: Vec<u64> = new.data.iter().map(|s| s.object_id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn remove_story_clears_flags() {
    let new = StoriesReducer::reduce(
        state(true, true),
        StoriesIntent::RemoveStory { story: story_two() },
    );
    assert!(!new.is_loading);
    assert!(!new.is_error);
}

#[test]
fn fetch_success_replaces_data_and_clears_flags() {
    for (loading, error) in [(false, false), (true, false), (false, true), (true, true)] {
        let prior = StoriesState {
            data: vec![another_story()],
            is_loading: loading,
            is_error: error,
        };
        let new = StoriesReducer::reduce(prior, StoriesIntent::FetchSuccess { stories: stories() });
        assert_eq!(new.data, stories());
        assert!(!new.is_loading);
        assert!(!new.is_error);
    }
}

#[test]
fn fetch_failure_sets_error_and_keeps_data() {
    for (loading, error) in [(false, false), (true, false), (false, true)] {
        let new = StoriesReducer::reduce(state(loading, error), StoriesIntent::FetchFailure);
        assert_eq!(new.data, stories());
        assert!(!new.is_loading);
        assert!(new.is_error);
    }
}

#[test]
fn fetch_init_sets_loading_and_clears_error() {
    let new = StoriesReducer::reduce(state(false, true), StoriesIntent::FetchInit);
    assert_eq!(new.data, stories());
    assert!(new.is_loading);
    assert!(!new.is_error);
}

#[test]
fn load_previous_replaces_data() {
    let new = StoriesReducer::reduce(
        state(true, false),
        StoriesIntent::LoadPrevious {
            stories: vec![another_story()],
        },
    );
    assert_eq!(new.data, vec![another_story()]);
    assert!(!new.is_loading);
    assert!(!new.is_error);
}

#[test]
fn reduce_leaves_caller_snapshot_untouched() {
    let before = state(false, false);
    let snapshot = before.clone();
    let _ = StoriesReducer::reduce(before.clone(), StoriesIntent::RemoveStory { story: story_one() });
    assert_eq!(before, snapshot);
}

#[test]
fn loading_and_error_never_both_set() {
    let intents = vec![
        StoriesIntent::FetchInit,
        StoriesIntent::FetchFailure,
        StoriesIntent::FetchInit,
        StoriesIntent::FetchSuccess { stories: stories() },
        StoriesIntent::FetchFailure,
        StoriesIntent::RemoveStory { story: story_one() },
        StoriesIntent::LoadPrevious { stories: vec![] },
    ];
    let mut current = StoriesState::default();
    for intent in intents {
        current = StoriesReducer::reduce(current, intent);
        assert!(!(current.is_loading && current.is_error));
    }
}
