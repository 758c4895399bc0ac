//! Terminal UI components.
//!
//! - [`render`]: Draws the help screen, the item line or the value prompt
//! - [`style`]: Highlight colors

pub mod style;

mod render;

pub use render::{HELP_LINES, items_line, prompt_label, render};
