use tracing::{debug, warn};

use crate::model::{Problem, ProblemParseError, Solution};

/// Result of running a problem through `ProblemProcessor::process`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessOutcome {
    Valid(Solution),
    /// The problem divides by zero; no solution exists.
    Invalid(Problem),
}

impl ProcessOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ProcessOutcome::Valid(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            ProcessOutcome::Valid(solution) => Some(solution),
            ProcessOutcome::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            ProcessOutcome::Valid(solution) => Some(solution),
            ProcessOutcome::Invalid(_) => None,
        }
    }
}

/// Validates problems and computes their solutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemProcessor;

impl ProblemProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// A problem is invalid only when it divides by zero.
    #[must_use]
    pub fn validate(&self, problem: &Problem) -> bool {
        !problem.divides_by_zero()
    }

    #[must_use]
    pub fn process(&self, problem: &Problem) -> ProcessOutcome {
        let is_valid = self.validate(problem);
        debug!(%problem, is_valid, "problem validated");

        if !is_valid {
            warn!(%problem, "invalid math problem");
            return ProcessOutcome::Invalid(*problem);
        }

        let correct_answer = problem
            .operator()
            .apply(problem.operand1(), problem.operand2());
        debug!(%problem, correct_answer, "solution created");
        ProcessOutcome::Valid(Solution::new(*problem, correct_answer))
    }

    /// Parse question text like `"8 / 2"` and process it.
    ///
    /// # Errors
    ///
    /// Returns `ProblemParseError` if the text is malformed or names an
    /// unsupported operator.
    pub fn process_text(&self, text: &str) -> Result<ProcessOutcome, ProblemParseError> {
        let problem: Problem = text.parse()?;
        Ok(self.process(&problem))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::{Operator, UnsupportedOperator};

    #[test]
    fn solves_each_operator() {
        let processor = ProblemProcessor::new();
        let cases = [
            (Operator::Add, 17.0),
            (Operator::Subtract, 7.0),
            (Operator::Multiply, 60.0),
            (Operator::Divide, 2.4),
        ];

        for (operator, expected) in cases {
            let outcome = processor.process(&Problem::new(12.0, 5.0, operator));
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.correct_answer(), expected);
            assert_eq!(solution.problem().operator(), operator);
        }
    }

    #[test]
    fn division_by_zero_is_invalid() {
        let problem = Problem::new(9.0, 0.0, Operator::Divide);
        let outcome = ProblemProcessor::new().process(&problem);

        assert!(!outcome.is_valid());
        assert_eq!(outcome, ProcessOutcome::Invalid(problem));
        assert!(outcome.into_solution().is_none());
    }

    #[test]
    fn zero_dividend_is_valid() {
        let outcome = ProblemProcessor::new().process(&Problem::new(0.0, 4.0, Operator::Divide));
        assert_eq!(outcome.solution().unwrap().correct_answer(), 0.0);
    }

    #[test]
    fn process_text_surfaces_unsupported_operator() {
        let processor = ProblemProcessor::new();

        let outcome = processor.process_text("8 / 2").unwrap();
        assert_eq!(outcome.solution().unwrap().correct_answer(), 4.0);

        let err = processor.process_text("8 ^ 2").unwrap_err();
        assert_eq!(err, ProblemParseError::Operator(UnsupportedOperator("^".into())));
    }

    proptest! {
        #[test]
        fn valid_unless_dividing_by_zero(
            a in -500i32..500,
            b in -500i32..500,
            operator in prop::sample::select(Operator::ALL.to_vec()),
        ) {
            let (a, b) = (a as f32, b as f32);
            let outcome = ProblemProcessor::new().process(&Problem::new(a, b, operator));

            if operator == Operator::Divide && b == 0.0 {
                prop_assert!(!outcome.is_valid());
            } else {
                let solution = outcome.solution().unwrap();
                prop_assert_eq!(solution.correct_answer(), operator.apply(a, b));
            }
        }
    }
}
