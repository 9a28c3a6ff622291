//! Light and dark color palettes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used when drawing the calculator screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub input: Rgb,
    pub operation: Rgb,
    /// Keypad keys other than the accented ones.
    pub button: Rgb,
    /// Accent for operator keys, `=` and history headings.
    pub accent: Rgb,
}

const ACCENT: Rgb = Rgb(0xFF, 0xCC, 0x00);

const LIGHT: Palette = Palette {
    background: Rgb(0xF1, 0xF1, 0xF1),
    input: Rgb(0x00, 0x00, 0x00),
    operation: Rgb(0x55, 0x55, 0x55),
    button: Rgb(0xE0, 0xE0, 0xE0),
    accent: ACCENT,
};

const DARK: Palette = Palette {
    background: Rgb(0x12, 0x12, 0x12),
    input: Rgb(0xFF, 0xFF, 0xFF),
    operation: Rgb(0xBB, 0xBB, 0xBB),
    button: Rgb(0x33, 0x33, 0x33),
    accent: ACCENT,
};

/// Display mode selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}
