//! Terminal front end: key mapping, theme, rendering and the session loop.

pub mod clipboard;
pub mod keys;
pub mod render;
pub mod session;
pub mod theme;

pub use keys::{Command, KeyError, parse_line};
pub use render::Screen;
pub use session::{Flow, Session, Snapshot};
pub use theme::Theme;
