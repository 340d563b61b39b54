//! Error types for the version-control driver abstraction.

use thiserror::Error;

/// Errors surfaced by drivers and the registry.
///
/// Every failure is reported synchronously to the immediate caller as part of
/// the failed operation's result; nothing is retried or logged-and-swallowed
/// internally.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Malformed input: a clone URL with the wrong scheme, a checkout path
    /// without its revision marker, or a filename containing a newline.
    #[error("format error: {0}")]
    Format(String),

    /// Filesystem failure while hashing, walking, resolving links, or
    /// creating the clone symlink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration payload or unknown driver name.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        DriverError::Config(err.to_string())
    }
}
