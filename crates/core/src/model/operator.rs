use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Raised when text names an operator outside `+ - * /`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported operator `{0}`, expected one of + - * /")]
pub struct UnsupportedOperator(pub String);

//
// ─── OPERATOR ─────────────────────────────────────────────────────────────────
//

/// Arithmetic operator a problem is built around.
///
/// The set is closed: once a symbol has been parsed into an `Operator`, every
/// downstream match is exhaustive and no "unknown operator" branch exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Parses a single operator symbol.
    ///
    /// `x` and `×` are accepted for multiplication, `÷` for division.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperator` for any other character.
    pub fn from_symbol(symbol: char) -> Result<Self, UnsupportedOperator> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | 'x' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(UnsupportedOperator(other.to_string())),
        }
    }

    /// Canonical ASCII symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator with float semantics (division by zero yields inf/NaN).
    #[must_use]
    pub fn apply(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnsupportedOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => Err(UnsupportedOperator(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = UnsupportedOperator;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(value: Operator) -> Self {
        value.symbol().to_string()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_parse() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()).unwrap(), op);
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn alternate_symbols_are_accepted() {
        assert_eq!(Operator::from_symbol('x').unwrap(), Operator::Multiply);
        assert_eq!(Operator::from_symbol('×').unwrap(), Operator::Multiply);
        assert_eq!(Operator::from_symbol('÷').unwrap(), Operator::Divide);
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let err = Operator::from_symbol('%').unwrap_err();
        assert_eq!(err, UnsupportedOperator("%".into()));

        let err = "++".parse::<Operator>().unwrap_err();
        assert_eq!(err, UnsupportedOperator("++".into()));
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn apply_matches_arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), 12.0);
        assert_eq!(Operator::Divide.apply(3.0, 4.0), 0.75);
    }

    #[test]
    fn serde_uses_symbol_strings() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"/\"");
        let parsed: Operator = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(parsed, Operator::Multiply);
        assert!(serde_json::from_str::<Operator>("\"^\"").is_err());
    }
}
