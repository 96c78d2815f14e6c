//! Search engine routing
//!
//! Builds the redirect URL for a query. Only whitelisted engines are
//! reachable; anything else falls back to DuckDuckGo.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Duck.ai chat endpoint, `%s` is replaced by the encoded query
const AI_URL: &str = "https://duckduckgo.com/?q=%s&ia=chat";

/// Percent-encode a single URL component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Whitelisted search engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Engine {
    Google,
    #[default]
    DuckDuckGo,
    Bing,
    Brave,
}

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::Google,
        Engine::DuckDuckGo,
        Engine::Bing,
        Engine::Brave,
    ];

    /// Look up a whitelisted engine by its exact name
    ///
    /// Anything not in the whitelist, including case variants, falls back to
    /// DuckDuckGo.
    pub fn from_name(name: &str) -> Self {
        Engine::ALL
            .into_iter()
            .find(|engine| engine.name() == name)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::Google => "google",
            Engine::DuckDuckGo => "duckduckgo",
            Engine::Bing => "bing",
            Engine::Brave => "brave",
        }
    }

    fn base_url(self) -> &'static str {
        match self {
            Engine::Google => "https://www.google.com/search?q=",
            Engine::DuckDuckGo => "https://duckduckgo.com/?q=",
            Engine::Bing => "https://www.bing.com/search?q=",
            Engine::Brave => "https://search.brave.com/search?q=",
        }
    }
}

impl From<String> for Engine {
    fn from(name: String) -> Self {
        Engine::from_name(&name)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a query is sent: the selected engine or the AI chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SearchMode {
    #[default]
    Search,
    Ai,
}

impl SearchMode {
    /// Parse a mode name; anything other than exactly "ai" is a plain search
    pub fn from_name(name: &str) -> Self {
        if name == "ai" {
            SearchMode::Ai
        } else {
            SearchMode::Search
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Search => SearchMode::Ai,
            SearchMode::Ai => SearchMode::Search,
        }
    }
}

impl From<String> for SearchMode {
    fn from(name: String) -> Self {
        SearchMode::from_name(&name)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Search => write!(f, "search"),
            SearchMode::Ai => write!(f, "ai"),
        }
    }
}

/// Build the redirect URL for a query
///
/// Returns `None` when the query is empty after trimming.
pub fn search_url(query: &str, mode: SearchMode, engine: Engine) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let encoded = encode_component(trimmed);
    let url = match mode {
        SearchMode::Ai => AI_URL.replace("%s", &encoded),
        SearchMode::Search => format!("{}{}", engine.base_url(), encoded),
    };
    Some(url)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
