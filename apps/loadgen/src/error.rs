//! Load generator errors.

use thiserror::Error;

/// Errors that stop a load run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A command-line option is out of range.
    ///
    /// ## When This Occurs
    /// - `--users 0` or `--duration 0`
    /// - `--host` without an `http://` or `https://` scheme
    #[error("Invalid --{flag}: {reason}")]
    InvalidOption { flag: &'static str, reason: String },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// A simulated user task panicked or was cancelled.
    #[error("Simulated user failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl LoadError {
    /// Creates an invalid option error.
    pub fn invalid(flag: &'static str, reason: impl Into<String>) -> Self {
        LoadError::InvalidOption {
            flag,
            reason: reason.into(),
        }
    }
}

/// Result type for load runs.
pub type LoadResult<T> = Result<T, LoadError>;
