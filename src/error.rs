use thiserror::Error;

/// Custom error types for newtab
#[derive(Debug, Error)]
pub enum NewtabError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Suggestion worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
