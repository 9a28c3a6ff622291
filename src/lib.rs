//! A single-screen pocket calculator.
//!
//! [`calculator`] is the engine: a pure reducer over key events with a
//! bounded history. [`ui`] is the terminal front end that owns the theme,
//! the history panel and the clipboard, and [`config`] loads user settings.

pub mod calculator;
pub mod config;
pub mod ui;
