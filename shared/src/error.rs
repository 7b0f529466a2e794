//! Error types for the verification email Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while processing a verification event.
///
/// The Lambda boundary collapses all of these into one generic 500 response;
/// the typed variants exist so the log line carries the actual cause.
#[derive(Error, Debug)]
pub enum Error {
    /// The SNS envelope had no records, or the message body was not a
    /// well-formed user details payload
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Secrets Manager lookup or secret payload parsing failed
    #[error("Secret error: {0}")]
    Secret(String),

    /// Email provider call failed (transport, auth, rate limit)
    #[error("Email send error: {0}")]
    Send(#[from] reqwest::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
