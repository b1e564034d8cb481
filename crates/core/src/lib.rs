#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod model;
pub mod processor;

pub use error::ConfigurationError;
pub use generator::ProblemGenerator;
pub use model::{
    AnswerResult, NumberRange, Operator, Problem, ProblemParseError, ResultType, SessionSummary,
    Solution, UnsupportedOperator, approximately_equal,
};
pub use processor::{ProblemProcessor, ProcessOutcome};
