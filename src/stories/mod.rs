//! Story records returned by the search API.

use serde::{Deserialize, Deserializer, Serialize};

/// One search hit.
///
/// Identity is `object_id`; the remaining fields are display data.
/// The API sends `objectID` as a decimal string and may send `null` for
/// any of the text or count fields, so decoding is lenient about both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u64,
    #[serde(rename = "objectID", deserialize_with = "object_id")]
    pub object_id: u64,
}

/// Body of a search response. Only `hits` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

/// Sum of `num_comments` over a story list, shown in the header.
pub fn total_comments(stories: &[Story]) -> u64 {
    stories.iter().map(|story| story.num_comments).sum()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawObjectId {
    Number(u64),
    Text(String),
}

fn object_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawObjectId::deserialize(deserializer)? {
        RawObjectId::Number(id) => Ok(id),
        RawObjectId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid objectID '{}'", text))),
    }
}
