use thiserror::Error;

/// Errors that can occur while talking to the recipe service or driving the UI
#[derive(Error, Debug)]
pub enum FinderError {
    /// The search query was empty or whitespace only
    #[error("Search query is empty")]
    EmptyQuery,

    /// The service answered with the null-meals sentinel
    #[error("No meals matched the request")]
    NoResults,

    /// Connection failure or non-success HTTP status
    #[error("Failed to reach recipe service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response decoded but did not have the expected shape
    #[error("Unexpected response from recipe service: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read input or write rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
