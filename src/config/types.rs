// Configuration type definitions

use serde::Deserialize;

use crate::search::{Engine, SearchMode};

/// Default settle delay before a suggestion fetch is dispatched
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Default per-request timeout for suggestion endpoints
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Whether suggestion endpoints may be contacted at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Direct,
    Disabled,
}

/// Search configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub mode: SearchMode,
}

/// Suggestions configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default)]
    pub fetch: FetchMode,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            fetch: FetchMode::Direct,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// A named link shown in the favourites or top-sites section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub favourites: Vec<Shortcut>,
    #[serde(default)]
    pub top_sites: Vec<Shortcut>,
}
