//! Calculator engine.
//!
//! This module provides:
//! - The key events the engine accepts
//! - A reducer turning `(state, event)` into the next state
//! - Numeric coercion and result formatting
//! - A bounded history of finished calculations

mod evaluation;
mod event;
mod history;
mod operator;
mod state;

pub use evaluation::{format_number, parse_numeric_or_zero};
pub use event::Event;
pub use history::{HISTORY_LIMIT, History, HistoryEntry};
pub use operator::{Operator, ParseOperatorError};
pub use state::{CalculatorState, INPUT_LIMIT, PendingOperation, font_size_hint};
