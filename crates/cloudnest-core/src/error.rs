//! Error types for CloudNest

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CloudNestError>;

/// Main error type for CloudNest client internals.
#[derive(Error, Debug)]
pub enum CloudNestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in. Run `cloudnest auth login` first")]
    NotLoggedIn,

    #[error("Session token is malformed")]
    MalformedToken,

    #[error("Session has expired. Run `cloudnest auth login` again")]
    SessionExpired,

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
}
