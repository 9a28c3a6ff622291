//! An interactive calculator session.
//!
//! The session owns the one [`CalculatorState`] plus everything the engine
//! does not care about: the theme, the history panel and status messages.
//! Commands are applied strictly one after another.

use crate::calculator::CalculatorState;
use crate::config::Config;
use crate::ui::clipboard::copy_to_clipboard;
use crate::ui::keys::{Command, parse_line};
use crate::ui::render::Screen;
use crate::ui::theme::Theme;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only view of the session for machine consumers.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub input: String,
    pub operation_display: String,
    pub history: Vec<String>,
    pub font_size_hint: u32,
    pub theme: Theme,
}

pub struct Session {
    state: CalculatorState,
    theme: Theme,
    show_history: bool,
    show_keypad: bool,
    color: bool,
    status: Option<String>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            state: CalculatorState::new(),
            theme: config.theme,
            show_history: config.show_history,
            show_keypad: config.show_keypad,
            color: config.color,
            status: None,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn history_visible(&self) -> bool {
        self.show_history
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        debug!(?command, "dispatching");
        match command {
            Command::Key(event) => {
                let state = std::mem::take(&mut self.state);
                self.state = state.apply(event);
            }
            Command::ToggleTheme => self.theme = self.theme.toggled(),
            Command::ToggleHistory => self.show_history = !self.show_history,
            Command::Copy => self.copy_input(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Parse and apply a typed line. Unknown keys reject the whole line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.status = None;
        let commands = match parse_line(line) {
            Ok(commands) => commands,
            Err(e) => {
                debug!("rejected line {:?}: {}", line, e);
                self.status = Some(e.to_string());
                return Flow::Continue;
            }
        };

        for command in commands {
            if self.dispatch(command) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn copy_input(&mut self) {
        let message = match copy_to_clipboard(self.state.input()) {
            Ok(()) => format!("copied {}", self.state.input()),
            Err(e) => {
                warn!("Clipboard copy failed: {:?}", e);
                e.to_string()
            }
        };
        self.status = Some(message);
    }

    pub fn render(&self) -> String {
        Screen {
            state: &self.state,
            theme: self.theme,
            show_history: self.show_history,
            show_keypad: self.show_keypad,
            status: self.status.as_deref(),
        }
        .render(self.color)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.state.input().to_string(),
            operation_display: self.state.operation_display(),
            history: self.state.history().lines(),
            font_size_hint: self.state.font_size_hint(),
            theme: self.theme,
        }
    }

    /// Read lines from `input` until EOF or `quit`, redrawing after each one.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", self.render())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
            write!(output, "{}", self.render())?;
            output.flush()?;
        }
        Ok(())
    }
}
