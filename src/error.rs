// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot resolve repository identity: {0}")]
    RepositoryIdentity(String),

    #[error("Fetch failed for '{path}': {message}")]
    Fetch { path: String, message: String },

    #[error("Provider returned status {status} for '{path}'")]
    Status { path: String, status: u16 },

    #[error("Failed to decode listing for '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HubError {
    pub fn fetch(path: &str, message: impl ToString) -> Self {
        Self::Fetch {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// True for errors raised while talking to a content provider.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::Decode { .. } | Self::Io(_)
        )
    }
}
