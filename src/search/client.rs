use async_trait::async_trait;
use reqwest::Client;

use crate::search::error::SearchError;
use crate::stories::{SearchResponse, Story};

/// Hacker News search endpoint. The term is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Build the query URL for a term.
///
/// The term is appended as a literal substring; URL parsing in the HTTP
/// client performs the only escaping.
pub fn query_url(endpoint: &str, term: &str) -> String {
    format!("{}{}", endpoint, term)
}

/// Source of search results.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Fetch the stories matching `term`.
    async fn search(&self, term: &str) -> Result<Vec<Story>, SearchError>;
}

/// `SearchApi` backed by a real HTTP endpoint.
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SearchError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchApi for HttpSearchClient {
    async fn search(&self, term: &str) -> Result<Vec<Story>, SearchError> {
        let url = query_url(&self.endpoint, term);
        tracing::debug!(%url, "Fetching stories");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        tracing::debug!(hits = parsed.hits.len(), "Search response decoded");
        Ok(parsed.hits)
    }
}
