//! The four binary operators the calculator understands.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

/// Returned when a string does not name one of `+ - * /`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operator `{0}`")]
pub struct ParseOperatorError(pub String);

impl Operator {
    /// The symbol used in the operation display and in history entries.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Map an operator symbol back to an operator.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not an error: `1 / 0` is infinite and `0 / 0` is NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| ParseOperatorError(s.to_string()))
            }
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}
