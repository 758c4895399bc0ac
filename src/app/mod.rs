//! Editor state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The sequence, cursor and current screen
//! - [`Message`]: Every action a key can trigger
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Event loop that reads keys and redraws

mod event_loop;
mod input;
mod model;
mod update;

pub use event_loop::wait_for_keypress;
pub use model::{EditorError, Model, Outcome, Phase, Prompt, PromptTarget, normalize_cursor};
pub use update::{Message, update};

use crate::ui::style::HighlightColor;

/// Runs edit sessions against the real terminal.
pub struct App {
    highlight: HighlightColor,
    show_help: bool,
}

impl App {
    /// Create an app with the default highlight and the help screen enabled.
    pub fn new() -> Self {
        Self {
            highlight: HighlightColor::default(),
            show_help: true,
        }
    }

    /// Set the color of the item under the cursor.
    pub const fn with_highlight(mut self, highlight: HighlightColor) -> Self {
        self.highlight = highlight;
        self
    }

    /// Show or skip the key binding screen before editing.
    pub const fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
