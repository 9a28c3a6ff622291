//! Drawing the calculator screen as terminal text.

use crate::calculator::CalculatorState;
use crate::ui::theme::{Palette, Rgb, Theme};
use colored::Colorize;

/// Width the operation and input lines are right-aligned to.
pub const SCREEN_WIDTH: usize = 28;

const KEY_WIDTH: usize = SCREEN_WIDTH / 4;

/// A key on the on-screen keypad. Labels are valid typed keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeypadKey {
    pub label: &'static str,
    /// Drawn in the accent color (clear, sign, backspace, operators, `=`).
    pub accent: bool,
}

const fn key(label: &'static str) -> KeypadKey {
    KeypadKey {
        label,
        accent: false,
    }
}

const fn accent(label: &'static str) -> KeypadKey {
    KeypadKey {
        label,
        accent: true,
    }
}

/// The 5x4 keypad, top row first.
pub const KEYPAD: [[KeypadKey; 4]; 5] = [
    [accent("C"), accent("+/-"), accent("⌫"), accent("÷")],
    [key("7"), key("8"), key("9"), accent("×")],
    [key("4"), key("5"), key("6"), accent("-")],
    [key("1"), key("2"), key("3"), accent("+")],
    [key("0"), key("%"), key("."), accent("=")],
];

/// Everything needed to draw one frame.
pub struct Screen<'a> {
    pub state: &'a CalculatorState,
    pub theme: Theme,
    pub show_history: bool,
    pub show_keypad: bool,
    /// One-off message shown below the input (e.g. clipboard feedback).
    pub status: Option<&'a str>,
}

/// How loudly the input line is drawn, derived from the font size hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Large,
    Medium,
    Small,
}

impl Emphasis {
    pub fn from_font_size(size: u32) -> Self {
        match size {
            s if s >= 48 => Self::Large,
            s if s >= 32 => Self::Medium,
            _ => Self::Small,
        }
    }
}

impl Screen<'_> {
    /// Render the frame. Without `color` the output is plain text.
    pub fn render(&self, color: bool) -> String {
        let palette = self.theme.palette();
        let mut lines = Vec::new();

        if self.show_history {
            lines.push(paint("History", palette.accent, palette.background, color));
            let history = self.state.history();
            if history.is_empty() {
                lines.push(paint("  (empty)", palette.operation, palette.background, color));
            }
            for entry in history.iter() {
                let line = format!("  {}", entry);
                lines.push(paint(&line, palette.operation, palette.background, color));
            }
            lines.push("-".repeat(SCREEN_WIDTH));
        }

        let operation = format!(
            "{:>width$}",
            self.state.operation_display(),
            width = SCREEN_WIDTH
        );
        lines.push(paint(&operation, palette.operation, palette.background, color));

        let input = format!("{:>width$}", self.state.input(), width = SCREEN_WIDTH);
        let emphasis = Emphasis::from_font_size(self.state.font_size_hint());
        lines.push(paint_input(
            &input,
            palette.input,
            palette.background,
            emphasis,
            color,
        ));

        if self.show_keypad {
            for row in &KEYPAD {
                lines.push(render_keypad_row(row, palette, color));
            }
        }

        if let Some(status) = self.status {
            lines.push(paint(status, palette.accent, palette.background, color));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Foreground and background of a keypad key.
pub fn key_colors(key: &KeypadKey, palette: &Palette) -> (Rgb, Rgb) {
    let bg = if key.accent {
        palette.accent
    } else {
        palette.button
    };
    (palette.input, bg)
}

fn render_keypad_row(row: &[KeypadKey; 4], palette: &Palette, color: bool) -> String {
    row.iter()
        .map(|key| {
            let cell = format!("{:^width$}", key.label, width = KEY_WIDTH);
            let (fg, bg) = key_colors(key, palette);
            paint(&cell, fg, bg, color)
        })
        .collect()
}

fn paint(text: &str, fg: Rgb, bg: Rgb, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    text.truecolor(fg.0, fg.1, fg.2)
        .on_truecolor(bg.0, bg.1, bg.2)
        .to_string()
}

fn paint_input(text: &str, fg: Rgb, bg: Rgb, emphasis: Emphasis, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let styled = text
        .truecolor(fg.0, fg.1, fg.2)
        .on_truecolor(bg.0, bg.1, bg.2);
    match emphasis {
        Emphasis::Large => styled.bold().to_string(),
        Emphasis::Medium => styled.to_string(),
        Emphasis::Small => styled.dimmed().to_string(),
    }
}
