//! The calculator state and its transition function.

use super::evaluation::{format_number, parse_numeric_or_zero};
use super::event::Event;
use super::history::{History, HistoryEntry};
use super::operator::Operator;
use serde::Serialize;
use tracing::trace;

/// Maximum number of characters digit entry may grow the input to.
pub const INPUT_LIMIT: usize = 20;

const INITIAL_INPUT: &str = "0";

/// An operator waiting for its second operand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PendingOperation {
    /// Snapshot of the input at the moment the operator was pressed.
    pub first_operand: String,
    pub operator: Operator,
}

/// Everything the engine remembers between key presses.
///
/// The state is a plain value. [`CalculatorState::apply`] consumes it and
/// returns the successor, so the presentation layer only ever holds one
/// current value.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    input: String,
    pending: Option<PendingOperation>,
    history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            input: INITIAL_INPUT.to_string(),
            pending: None,
            history: History::new(),
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer being edited, or the last result.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn first_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.first_operand.as_str())
    }

    /// The `A op` preview shown above the input, empty when nothing is pending.
    pub fn operation_display(&self) -> String {
        self.pending
            .as_ref()
            .map(|p| format!("{} {}", p.first_operand, p.operator))
            .unwrap_or_default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Font size suggested for the current input.
    pub fn font_size_hint(&self) -> u32 {
        font_size_hint(self.input.chars().count())
    }

    /// Reduce one key event into the next state. Never fails.
    pub fn apply(self, event: Event) -> Self {
        trace!(?event, input = %self.input, "applying event");
        match event {
            Event::Digit(d) => self.push_digit(d),
            Event::Operator(op) => self.set_operator(op),
            Event::Equals => self.evaluate(),
            Event::Backspace => self.backspace(),
            Event::ClearAll => self.clear_all(),
            Event::ToggleSign => self.toggle_sign(),
            Event::Percent => self.percent(),
        }
    }

    fn push_digit(mut self, d: char) -> Self {
        if !Event::is_digit_char(d) || self.input.chars().count() >= INPUT_LIMIT {
            return self;
        }
        if self.input == INITIAL_INPUT {
            self.input = d.to_string();
        } else {
            self.input.push(d);
        }
        self
    }

    fn set_operator(mut self, operator: Operator) -> Self {
        // No second operand typed yet: only the operator changes.
        if let Some(pending) = self.pending.as_mut()
            && self.input == INITIAL_INPUT
        {
            pending.operator = operator;
            return self;
        }

        let first_operand = std::mem::replace(&mut self.input, INITIAL_INPUT.to_string());
        self.pending = Some(PendingOperation {
            first_operand,
            operator,
        });
        self
    }

    fn evaluate(mut self) -> Self {
        let Some(PendingOperation {
            first_operand,
            operator,
        }) = self.pending.take()
        else {
            return self;
        };

        let lhs = parse_numeric_or_zero(&first_operand);
        let rhs = parse_numeric_or_zero(&self.input);
        let result = format_number(operator.apply(lhs, rhs));

        let entry = HistoryEntry {
            first_operand,
            operator,
            second_operand: std::mem::take(&mut self.input),
            result: result.clone(),
        };
        trace!(%entry, "calculation finished");
        self.history.push(entry);
        self.input = result;
        self
    }

    fn backspace(mut self) -> Self {
        if self.input.chars().count() > 1 {
            self.input.pop();
        } else {
            self.input = INITIAL_INPUT.to_string();
        }
        self
    }

    fn clear_all(mut self) -> Self {
        self.input = INITIAL_INPUT.to_string();
        self.pending = None;
        self
    }

    fn toggle_sign(mut self) -> Self {
        self.input = match self.input.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.input),
        };
        self
    }

    fn percent(mut self) -> Self {
        self.input = format_number(parse_numeric_or_zero(&self.input) / 100.0);
        self
    }
}

/// Font size for an input of `len` characters: long inputs shrink.
pub fn font_size_hint(len: usize) -> u32 {
    if len > 20 {
        24
    } else if len > 11 {
        32
    } else {
        48
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[Event]) -> CalculatorState {
        events
            .iter()
            .fold(CalculatorState::new(), |state, &event| state.apply(event))
    }

    fn digits(s: &str) -> Vec<Event> {
        s.chars().map(Event::Digit).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.input(), "0");
        assert_eq!(state.operator(), None);
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.operation_display(), "");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        assert_eq!(run(&digits("0")).input(), "0");
        assert_eq!(run(&digits("123")).input(), "123");
        assert_eq!(run(&digits("007")).input(), "7");
        assert_eq!(run(&digits(".5")).input(), ".5");
        assert_eq!(
            run(&digits("12345678901234567890")).input(),
            "12345678901234567890"
        );
    }

    #[test]
    fn test_digits_stop_at_limit() {
        let full = run(&digits("12345678901234567890"));
        assert_eq!(full.input().len(), INPUT_LIMIT);

        let after = full
            .clone()
            .apply(Event::Digit('9'))
            .apply(Event::Digit('.'));
        assert_eq!(after, full);
    }

    #[test]
    fn test_digit_path_is_permissive() {
        assert_eq!(run(&digits("1.2.3")).input(), "1.2.3");
        let state = run(&[Event::ToggleSign, Event::Digit('5')]);
        assert_eq!(state.input(), "-05");
    }

    #[test]
    fn test_non_digit_character_ignored() {
        let state = run(&[Event::Digit('4'), Event::Digit('x')]);
        assert_eq!(state.input(), "4");
    }

    #[test]
    fn test_operator_snapshots_input() {
        let state = run(&[
            Event::Digit('4'),
            Event::Digit('2'),
            Operator::Multiply.into(),
        ]);
        assert_eq!(state.first_operand(), Some("42"));
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(state.operation_display(), "42 *");
        assert_eq!(state.input(), "0");
    }

    #[test]
    fn test_simple_addition() {
        let state = run(&[
            Event::Digit('5'),
            Operator::Add.into(),
            Event::Digit('3'),
            Event::Equals,
        ]);
        assert_eq!(state.input(), "8");
        assert_eq!(state.history().lines(), vec!["5 + 3 = 8"]);
        assert_eq!(state.operation_display(), "");
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_division_by_zero() {
        let state = run(&[
            Event::Digit('1'),
            Operator::Divide.into(),
            Event::Digit('0'),
            Event::Equals,
        ]);
        assert_eq!(state.input(), "Infinity");
        assert_eq!(state.history().lines(), vec!["1 / 0 = Infinity"]);
    }

    #[test]
    fn test_zero_by_zero_is_nan() {
        let state = run(&[Operator::Divide.into(), Event::Equals]);
        assert_eq!(state.input(), "NaN");
        assert_eq!(state.history().lines(), vec!["0 / 0 = NaN"]);
    }

    #[test]
    fn test_result_feeds_next_calculation() {
        let state = run(&[
            Event::Digit('1'),
            Operator::Divide.into(),
            Event::Digit('0'),
            Event::Equals,
            Operator::Subtract.into(),
            Event::Digit('1'),
            Event::Equals,
        ]);
        assert_eq!(state.input(), "Infinity");
        assert_eq!(
            state.history().latest().map(ToString::to_string).as_deref(),
            Some("Infinity - 1 = Infinity")
        );
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let before = run(&digits("12"));
        let after = before.clone().apply(Event::Equals);
        assert_eq!(after, before);
    }

    #[test]
    fn test_second_operator_overwrites() {
        let state = run(&[
            Event::Digit('5'),
            Operator::Add.into(),
            Operator::Subtract.into(),
        ]);
        assert_eq!(state.operator(), Some(Operator::Subtract));
        assert_eq!(state.operation_display(), "5 -");
        assert_eq!(state.first_operand(), Some("5"));
        assert_eq!(state.input(), "0");
    }

    #[test]
    fn test_second_operator_after_new_digits_resnapshots() {
        let state = run(&[
            Event::Digit('5'),
            Operator::Add.into(),
            Event::Digit('7'),
            Operator::Multiply.into(),
        ]);
        assert_eq!(state.first_operand(), Some("7"));
        assert_eq!(state.operation_display(), "7 *");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_backspace() {
        assert_eq!(run(&[Event::Backspace]).input(), "0");
        let state = run(&[Event::Digit('1'), Event::Digit('2'), Event::Backspace]);
        assert_eq!(state.input(), "1");
        assert_eq!(run(&[Event::Digit('7'), Event::Backspace]).input(), "0");
        let state = run(&[Event::Digit('7'), Event::ToggleSign, Event::Backspace]);
        assert_eq!(state.input(), "-");
    }

    #[test]
    fn test_clear_all_keeps_history() {
        let state = run(&[
            Event::Digit('2'),
            Operator::Multiply.into(),
            Event::Digit('3'),
            Event::Equals,
            Event::Digit('9'),
            Operator::Add.into(),
            Event::Digit('1'),
        ]);
        let history = state.history().clone();
        let cleared = state.apply(Event::ClearAll);
        assert_eq!(cleared.input(), "0");
        assert_eq!(cleared.pending(), None);
        assert_eq!(cleared.operation_display(), "");
        assert_eq!(cleared.history(), &history);
    }

    #[test]
    fn test_toggle_sign_is_involution() {
        for input in ["0", "42", "3.5", "1.2.3"] {
            let state = run(&digits(input));
            let twice = state
                .clone()
                .apply(Event::ToggleSign)
                .apply(Event::ToggleSign);
            assert_eq!(twice.input(), state.input());
        }
        assert_eq!(run(&[Event::Digit('9'), Event::ToggleSign]).input(), "-9");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run(&[Event::Digit('5'), Event::Percent]).input(), "0.05");
        let state = run(&[Event::Digit('5'), Event::Digit('0'), Event::Percent]);
        assert_eq!(state.input(), "0.5");
        let state = run(&[Event::ToggleSign, Event::Backspace, Event::Percent]);
        assert_eq!(state.input(), "0");
    }

    #[test]
    fn test_history_keeps_latest_seven() {
        // ClearAll starts each cycle fresh; otherwise the digit would append
        // to the previous result.
        let mut events = Vec::new();
        for n in 1..=8u32 {
            let digit = char::from_digit(n, 10).unwrap();
            events.extend([
                Event::ClearAll,
                Event::Digit(digit),
                Operator::Add.into(),
                Event::Digit('1'),
                Event::Equals,
            ]);
        }
        let state = run(&events);

        let expected: Vec<String> = (2..=8)
            .map(|n| format!("{} + 1 = {}", n, n + 1))
            .collect();
        assert_eq!(state.history().len(), 7);
        assert_eq!(state.history().lines(), expected);
        assert!(state.history().iter().all(|e| e.first_operand != "1"));
    }

    #[test]
    fn test_history_cycles_chain_through_result() {
        // Without a clear, the next digit appends to the displayed result.
        let state = run(&[
            Event::Digit('1'),
            Operator::Add.into(),
            Event::Digit('1'),
            Event::Equals,
            Event::Digit('2'),
            Operator::Add.into(),
            Event::Digit('1'),
            Event::Equals,
        ]);
        assert_eq!(state.history().lines(), vec!["1 + 1 = 2", "22 + 1 = 23"]);
    }

    #[test]
    fn test_font_size_hint() {
        assert_eq!(font_size_hint(1), 48);
        assert_eq!(font_size_hint(11), 48);
        assert_eq!(font_size_hint(12), 32);
        assert_eq!(font_size_hint(20), 32);
        assert_eq!(font_size_hint(21), 24);
        assert_eq!(run(&digits("1234567890123")).font_size_hint(), 32);
    }
}
