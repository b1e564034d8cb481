use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operator::{Operator, UnsupportedOperator};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors from parsing problem text such as `"3 + 4"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemParseError {
    #[error("expected `<operand> <operator> <operand>`, got `{0}`")]
    Malformed(String),
    #[error("invalid operand `{0}`")]
    InvalidOperand(String),
    #[error(transparent)]
    Operator(#[from] UnsupportedOperator),
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// An arithmetic expression awaiting evaluation. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    operand1: f32,
    operand2: f32,
    operator: Operator,
}

impl Problem {
    #[must_use]
    pub fn new(operand1: f32, operand2: f32, operator: Operator) -> Self {
        Self {
            operand1,
            operand2,
            operator,
        }
    }

    #[must_use]
    pub fn operand1(&self) -> f32 {
        self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> f32 {
        self.operand2
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn divides_by_zero(&self) -> bool {
        self.operator == Operator::Divide && self.operand2 == 0.0
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}

impl FromStr for Problem {
    type Err = ProblemParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [lhs, op, rhs] = *parts.as_slice() else {
            return Err(ProblemParseError::Malformed(s.trim().to_string()));
        };

        let operand = |raw: &str| {
            raw.parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ProblemParseError::InvalidOperand(raw.to_string()))
        };

        Ok(Self::new(operand(lhs)?, operand(rhs)?, op.parse()?))
    }
}

//
// ─── SOLUTION ─────────────────────────────────────────────────────────────────
//

/// A validated problem paired with its correct answer.
///
/// Only `ProblemProcessor` builds these, so a `Solution` never wraps a
/// division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    problem: Problem,
    correct_answer: f32,
}

impl Solution {
    pub(crate) fn new(problem: Problem, correct_answer: f32) -> Self {
        Self {
            problem,
            correct_answer,
        }
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[must_use]
    pub fn correct_answer(&self) -> f32 {
        self.correct_answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
