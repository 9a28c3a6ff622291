//! Key events accepted by the calculator engine.

use super::operator::Operator;

/// A discrete key press forwarded from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// One of the four binary operators.
    Operator(Operator),
    Equals,
    Backspace,
    ClearAll,
    ToggleSign,
    Percent,
}

impl Event {
    /// Whether `c` is accepted by [`Event::Digit`].
    pub fn is_digit_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
