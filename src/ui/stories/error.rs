use thiserror::Error;

/// Errors from decoding an untyped action envelope.
///
/// Both variants indicate a defect in whoever produced the envelope.
#[derive(Debug, Error)]
pub enum StoriesError {
    #[error("Unrecognized action '{kind}'")]
    UnrecognizedAction { kind: String },

    #[error("Malformed payload for action '{kind}': {source}")]
    MalformedAction {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}
