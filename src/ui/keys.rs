//! Mapping typed keys to calculator events and screen commands.
//!
//! A line such as `12 x 3 =` or `5+/-%` is split into tokens. Calculator
//! keys become [`Event`]s; a few words drive the screen itself (theme,
//! history panel, clipboard, quit).

use crate::calculator::{Event, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// One key token at the start of the remaining text.
    /// Longer spellings come first so `+/-` wins over `+` and `copy` over `c`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?i:\+/-|±|⌫|backspace|bs|neg|history|theme|copy|clear|ac|c|quit|exit|enter|[0-9.]|[-+*/x×÷%=<])"
    ).unwrap();
}

/// Something the user asked the screen to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward a key to the calculator engine.
    Key(Event),
    ToggleTheme,
    ToggleHistory,
    /// Copy the current input to the clipboard.
    Copy,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key `{token}` at position {offset}")]
    UnknownKey { token: String, offset: usize },
}

/// Split a typed line into commands.
///
/// The whole line is rejected if any token is unknown, so a typo never
/// applies half of a sequence.
pub fn parse_line(line: &str) -> Result<Vec<Command>, KeyError> {
    let mut commands = Vec::new();
    let mut offset = 0;

    while offset < line.len() {
        let rest = &line[offset..];
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        let Some(m) = KEY_TOKEN.find(trimmed) else {
            let token = trimmed
                .split_whitespace()
                .next()
                .unwrap_or(trimmed)
                .to_string();
            return Err(KeyError::UnknownKey { token, offset });
        };

        commands.push(command_for(&m.as_str().to_lowercase()));
        offset += m.end();
    }

    Ok(commands)
}

/// Translate a token matched by [`KEY_TOKEN`].
fn command_for(token: &str) -> Command {
    let event = match token {
        "theme" => return Command::ToggleTheme,
        "history" => return Command::ToggleHistory,
        "copy" => return Command::Copy,
        "quit" | "exit" => return Command::Quit,
        "+/-" | "±" | "neg" => Event::ToggleSign,
        "⌫" | "<" | "bs" | "backspace" => Event::Backspace,
        "c" | "ac" | "clear" => Event::ClearAll,
        "=" | "enter" => Event::Equals,
        "%" => Event::Percent,
        "x" | "×" => Event::Operator(Operator::Multiply),
        "÷" => Event::Operator(Operator::Divide),
        other => match other.parse::<Operator>() {
            Ok(op) => Event::Operator(op),
            Err(_) => Event::Digit(other.chars().next().unwrap_or('0')),
        },
    };
    Command::Key(event)
}
