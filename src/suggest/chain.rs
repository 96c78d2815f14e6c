//! Suggestion source chain
//!
//! Tries each source in priority order and stops at the first one that
//! returns a well-formed response. Failures never reach the caller; they
//! are logged and the next source is consulted.

use std::sync::Arc;

use super::source::{MIN_QUERY_CHARS, SourceDescriptor, default_sources};
use super::transport::{FetchError, Transport};

/// Ordered fallback chain over suggestion sources
#[derive(Clone)]
pub struct SourceChain {
    sources: Vec<SourceDescriptor>,
    transport: Arc<dyn Transport>,
}

impl SourceChain {
    /// Chain over the built-in sources
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_sources(default_sources(), transport)
    }

    pub fn with_sources(sources: Vec<SourceDescriptor>, transport: Arc<dyn Transport>) -> Self {
        Self { sources, transport }
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Fetch suggestions for a query
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] after trimming resolve to an
    /// empty list without touching the network. The result is empty when
    /// every source fails.
    pub async fn fetch(&self, query: &str) -> Vec<String> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        for source in &self.sources {
            match self.fetch_from(source, trimmed).await {
                Ok(suggestions) => {
                    log::debug!(
                        "{} returned {} suggestions for {:?}",
                        source.name,
                        suggestions.len(),
                        trimmed
                    );
                    return suggestions;
                }
                Err(e) => {
                    log::debug!("{} skipped for {:?}: {}", source.name, trimmed, e);
                }
            }
        }

        Vec::new()
    }

    async fn fetch_from(
        &self,
        source: &SourceDescriptor,
        query: &str,
    ) -> Result<Vec<String>, FetchError> {
        let data = self.transport.get_json(&source.url(query)).await?;
        source.normalize(&data)
    }
}

impl std::fmt::Debug for SourceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceChain")
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod chain_tests;
