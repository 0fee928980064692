//! Intents for the story list.

use serde::Deserialize;
use serde_json::Value;

use crate::stories::Story;
use crate::ui::mvi::Intent;
use crate::ui::stories::error::StoriesError;

/// Intents that can be dispatched to the story list reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesIntent {
    /// A fetch has started.
    FetchInit,

    /// A fetch returned these stories.
    FetchSuccess { stories: Vec<Story> },

    /// A fetch failed. Data is kept.
    FetchFailure,

    /// Show a cached result from the search history.
    LoadPrevious { stories: Vec<Story> },

    /// Dismiss a story, matched by `object_id`.
    RemoveStory { story: Story },
}

impl Intent for StoriesIntent {}

/// Wire name of each intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    FetchInit,
    FetchSuccess,
    FetchFailure,
    LoadPrevious,
    RemoveStory,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::FetchInit,
        ActionKind::FetchSuccess,
        ActionKind::FetchFailure,
        ActionKind::LoadPrevious,
        ActionKind::RemoveStory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::FetchInit => "FETCH_INIT",
            ActionKind::FetchSuccess => "FETCH_SUCCESS",
            ActionKind::FetchFailure => "FETCH_FAILURE",
            ActionKind::LoadPrevious => "LOAD_PREVIOUS",
            ActionKind::RemoveStory => "REMOVE_STORY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

#[derive(Deserialize)]
struct ActionEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl StoriesIntent {
    pub fn kind(&self) -> ActionKind {
        match self {
            StoriesIntent::FetchInit => ActionKind::FetchInit,
            StoriesIntent::FetchSuccess { .. } => ActionKind::FetchSuccess,
            StoriesIntent::FetchFailure => ActionKind::FetchFailure,
            StoriesIntent::LoadPrevious { .. } => ActionKind::LoadPrevious,
            StoriesIntent::RemoveStory { .. } => ActionKind::RemoveStory,
        }
    }

    /// Decode a JSON action envelope: `{"type": "...", "payload": ...}`.
    ///
    /// `FETCH_SUCCESS` and `LOAD_PREVIOUS` take an array of stories,
    /// `REMOVE_STORY` takes one story, the rest ignore the payload.
    pub fn decode(json: &str) -> Result<Self, StoriesError> {
        let envelope: ActionEnvelope =
            serde_json::from_str(json).map_err(|source| StoriesError::MalformedAction {
                kind: "<envelope>".to_string(),
                source,
            })?;

        let Some(kind) = ActionKind::from_name(&envelope.kind) else {
            return Err(StoriesError::UnrecognizedAction {
                kind: envelope.kind,
            });
        };

        let malformed = |source| StoriesError::MalformedAction {
            kind: envelope.kind.clone(),
            source,
        };

        let intent = match kind {
            ActionKind::FetchInit => StoriesIntent::FetchInit,
            ActionKind::FetchFailure => StoriesIntent::FetchFailure,
            ActionKind::FetchSuccess => StoriesIntent::FetchSuccess {
                stories: serde_json::from_value(envelope.payload.clone()).map_err(malformed)?,
            },
            ActionKind::LoadPrevious => StoriesIntent::LoadPrevious {
                stories: serde_json::from_value(envelope.payload.clone()).map_err(malformed)?,
            },
            ActionKind::RemoveStory => StoriesIntent::RemoveStory {
                story: serde_json::from_value(envelope.payload.clone()).map_err(malformed)?,
            },
        };
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ActionKind::from_name("fetch_init"), None);
    }

    #[test]
    fn decode_fetch_init_without_payload() {
        let intent = StoriesIntent::decode(r#"{"type":"FETCH_INIT"}"#).unwrap();
        assert_eq!(intent, StoriesIntent::FetchInit);
    }

    #[test]
    fn decode_remove_story_payload() {
        let intent = StoriesIntent::decode(
            r#"{"type":"REMOVE_STORY","payload":{"title":"React","objectID":0}}"#,
        )
        .unwrap();
        match intent {
            StoriesIntent::RemoveStory { story } => assert_eq!(story.object_id, 0),
            other => panic!("Expected RemoveStory, got {:?}", other),
        }
    }

    #[test]
    fn decode_unknown_type_is_unrecognized() {
        let err = StoriesIntent::decode(r#"{"type":"SORT_STORIES","payload":[]}"#).unwrap_err();
        assert!(matches!(err, StoriesError::UnrecognizedAction { ref kind } if kind == "SORT_STORIES"));
    }

    #[test]
    fn decode_wrong_payload_shape_is_malformed() {
        let err = StoriesIntent::decode(r#"{"type":"FETCH_SUCCESS","payload":{"hits":[]}}"#)
            .unwrap_err();
        assert!(matches!(err, StoriesError::MalformedAction { ref kind, .. } if kind == "FETCH_SUCCESS"));
    }

    #[test]
    fn decode_garbage_is_malformed_envelope() {
        let err = StoriesIntent::decode("not json").unwrap_err();
        assert!(matches!(err, StoriesError::MalformedAction { .. }));
    }
}
