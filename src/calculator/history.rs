//! Bounded log of completed calculations.

use super::operator::Operator;
use serde::{Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;

/// Number of calculations kept; older ones are evicted first.
pub const HISTORY_LIMIT: usize = 7;

/// A finished `A op B = R` calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// First operand as it was typed.
    pub first_operand: String,
    pub operator: Operator,
    /// Second operand as it was typed.
    pub second_operand: String,
    /// Formatted result.
    pub result: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first_operand, self.operator, self.second_operand, self.result
        )
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The most recent calculations in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest ones beyond [`HISTORY_LIMIT`].
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries rendered as `A op B = R` strings, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
