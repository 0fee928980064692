use thiserror::Error;

/// Errors that can occur while fetching search results.
///
/// The UI treats every variant the same way (the fetch failed); the
/// variants only exist so logs say why.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request could not be built or sent, or the body could not be read.
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Search endpoint returned status {0}")]
    Status(u16),

    /// Body was not a valid search response.
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}
