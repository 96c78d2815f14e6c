//! Suggestion source descriptors
//!
//! Each source pairs an endpoint URL template with the response shape it
//! returns. Validation and normalization are driven by that shape so the
//! chain can treat every source the same way.

use serde_json::Value;

use super::transport::FetchError;
use crate::search::encode_component;

/// Maximum number of suggestions kept from any source
pub const MAX_ITEMS: usize = 7;

/// Queries shorter than this (after trimming) never reach the network
pub const MIN_QUERY_CHARS: usize = 2;

/// Placeholder replaced by the encoded query in a URL template
const QUERY_PLACEHOLDER: &str = "{q}";

/// Response shapes returned by suggestion endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// OpenSearch suggestions: `[query, ["s1", "s2", ...]]`
    OpenSearch,
    /// Phrase objects: `[{"phrase": "s1"}, {"phrase": "s2"}, ...]`
    PhraseObjects,
}

/// One endpoint in the fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub name: String,
    pub url_template: String,
    pub format: ResponseFormat,
}

impl SourceDescriptor {
    pub fn new(name: &str, url_template: &str, format: ResponseFormat) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            format,
        }
    }

    /// Build the request URL for an already-trimmed query
    pub fn url(&self, query: &str) -> String {
        self.url_template
            .replace(QUERY_PLACEHOLDER, &encode_component(query))
    }

    /// Validate a decoded response and flatten it into at most
    /// [`MAX_ITEMS`] suggestions
    pub fn normalize(&self, data: &Value) -> Result<Vec<String>, FetchError> {
        match self.format {
            ResponseFormat::OpenSearch => normalize_open_search(data),
            ResponseFormat::PhraseObjects => normalize_phrases(data),
        }
    }
}

/// The built-in chain: Google, then Bing, then DuckDuckGo
pub fn default_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "google",
            "https://suggestqueries.google.com/complete/search?client=firefox&q={q}",
            ResponseFormat::OpenSearch,
        ),
        SourceDescriptor::new(
            "bing",
            "https://api.bing.com/osjson.aspx?query={q}",
            ResponseFormat::OpenSearch,
        ),
        SourceDescriptor::new(
            "duckduckgo",
            "https://duckduckgo.com/ac/?q={q}",
            ResponseFormat::PhraseObjects,
        ),
    ]
}

fn normalize_open_search(data: &Value) -> Result<Vec<String>, FetchError> {
    let items = data
        .as_array()
        .and_then(|arr| arr.get(1))
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(FetchError::Shape)?;

    // Every entry must be a string, not just the ones we keep
    if !items.iter().all(Value::is_string) {
        return Err(FetchError::Shape);
    }

    Ok(items
        .iter()
        .take(MAX_ITEMS)
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

fn normalize_phrases(data: &Value) -> Result<Vec<String>, FetchError> {
    let items = data
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or(FetchError::Shape)?;

    if !items[0].get("phrase").is_some_and(Value::is_string) {
        return Err(FetchError::Shape);
    }

    Ok(items
        .iter()
        .take(MAX_ITEMS)
        .filter_map(|item| item.get("phrase").and_then(Value::as_str))
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
