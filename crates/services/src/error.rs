//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{ConfigurationError, Problem};

/// Errors emitted by `QuizSession`.
///
/// None of these change the answer history or the question counter.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no active problem to answer")]
    NoActiveProblem,
    #[error("the current question was already answered correctly")]
    AlreadyAnswered,
    #[error("generated problem `{0}` failed validation")]
    InvalidProblem(Problem),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Errors emitted while loading a `SessionConfig` from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}
