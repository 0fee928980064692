//! Network side of the app: the search API seam and its HTTP client.

mod client;
mod error;

pub use client::{query_url, HttpSearchClient, SearchApi, DEFAULT_ENDPOINT};
pub use error::SearchError;
