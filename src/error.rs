//! Error types for lookups and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a single submission.
///
/// Every variant is terminal for the current lookup only; the form stays
/// usable afterwards. `Clone` so results can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The form was submitted in an incomplete state.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status.
    #[error("Error {status} {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The route could not be joined onto the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// A success response whose body was not a list of records.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Failures while loading [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid API base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("API base URL {url:?} cannot have routes joined onto it")]
    NotABase { url: String },
}
