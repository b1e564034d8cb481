use thiserror::Error;

use crate::model::UnsupportedOperator;

/// Invalid session setup. Always surfaced before any problem is generated.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("invalid number range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    #[error(transparent)]
    Operator(#[from] UnsupportedOperator),
    #[error("time per question must be positive and finite, got {0}")]
    InvalidTimePerQuestion(f32),
    #[error("a session needs at least one question")]
    NoQuestions,
}
