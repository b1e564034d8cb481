mod answer;
mod operator;
mod problem;
mod range;
mod summary;

pub use answer::{AnswerResult, RELATIVE_TOLERANCE, ResultType, approximately_equal};
pub use operator::{Operator, UnsupportedOperator};
pub use problem::{Problem, ProblemParseError, Solution};
pub use range::NumberRange;
pub use summary::SessionSummary;
