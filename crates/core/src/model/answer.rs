use serde::{Deserialize, Serialize};

use super::problem::Solution;

/// Relative tolerance used when comparing a submitted answer with the solution.
pub const RELATIVE_TOLERANCE: f32 = 1e-5;

/// Floating-point near-equality.
///
/// Two values match when they differ by at most `RELATIVE_TOLERANCE` of the
/// larger magnitude, with an absolute floor of `8 * f32::EPSILON` so that
/// answers around zero still compare sensibly.
#[must_use]
pub fn approximately_equal(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= (RELATIVE_TOLERANCE * scale).max(f32::EPSILON * 8.0)
}

//
// ─── RESULT TYPE ──────────────────────────────────────────────────────────────
//

/// Outcome classification of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultType {
    /// Right answer, more questions remain.
    Correct,
    /// Wrong answer; the question stays open.
    Incorrect,
    /// The countdown expired and a zero answer was recorded.
    TimeUp,
    /// Right answer to the final question; the level is complete.
    LastQuestionCorrect,
}

impl ResultType {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, ResultType::Correct | ResultType::LastQuestionCorrect)
    }
}

//
// ─── ANSWER RESULT ────────────────────────────────────────────────────────────
//

/// A solution paired with the answer the user submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnswerResult {
    solution: Solution,
    input_answer: f32,
}

impl AnswerResult {
    #[must_use]
    pub fn new(solution: Solution, input_answer: f32) -> Self {
        Self {
            solution,
            input_answer,
        }
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub fn input_answer(&self) -> f32 {
        self.input_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        approximately_equal(self.solution.correct_answer(), self.input_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Operator, Problem};
    use crate::processor::ProblemProcessor;

    fn solution_for(a: f32, b: f32, op: Operator) -> Solution {
        ProblemProcessor::new()
            .process(&Problem::new(a, b, op))
            .into_solution()
            .unwrap()
    }

    #[test]
    fn exact_answer_is_correct() {
        let result = AnswerResult::new(solution_for(3.0, 4.0, Operator::Add), 7.0);
        assert!(result.is_correct());
        assert_eq!(result.input_answer(), 7.0);
    }

    #[test]
    fn off_by_one_is_incorrect() {
        let result = AnswerResult::new(solution_for(3.0, 4.0, Operator::Add), 8.0);
        assert!(!result.is_correct());
    }

    #[test]
    fn repeating_quotient_matches_typed_decimal() {
        let solution = solution_for(1.0, 3.0, Operator::Divide);
        assert!(AnswerResult::new(solution, 0.333_333_34).is_correct());
        assert!(!AnswerResult::new(solution, 0.33).is_correct());
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert!(approximately_equal(1_000_000.0, 1_000_005.0));
        assert!(!approximately_equal(1_000_000.0, 1_000_100.0));
        assert!(approximately_equal(0.0, 0.0));
        assert!(approximately_equal(0.0, f32::EPSILON));
        assert!(!approximately_equal(0.0, 0.001));
        assert!(!approximately_equal(f32::NAN, f32::NAN));
    }

    #[test]
    fn result_type_correctness() {
        assert!(ResultType::Correct.is_correct());
        assert!(ResultType::LastQuestionCorrect.is_correct());
        assert!(!ResultType::Incorrect.is_correct());
        assert!(!ResultType::TimeUp.is_correct());
    }
}
