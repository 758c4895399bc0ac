use thiserror::Error;

use crate::element::Element;
use crate::ui::style::HighlightColor;

/// Errors raised when a session cannot be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("cannot edit an empty sequence")]
    EmptySequence,
}

/// Where a submitted prompt value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    /// Replace the item under the cursor
    Replace,
    /// Append to the end of the sequence
    Append,
}

/// Text being typed for a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub target: PromptTarget,
    pub input: String,
}

impl Prompt {
    pub const fn new(target: PromptTarget) -> Self {
        Self {
            target,
            input: String::new(),
        }
    }
}

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Key binding manual shown before editing starts
    Help,
    /// Moving the cursor over the items
    Browsing,
    /// Reading a typed value
    Prompt(Prompt),
    /// Confirmed with Enter
    Done,
    /// Aborted with Ctrl+C
    Interrupted,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Interrupted,
}

/// The complete editor state.
///
/// The sequence is never empty and `cursor < items.len()` holds between
/// messages.
#[derive(Debug, Clone)]
pub struct Model<T> {
    pub(super) items: Vec<T>,
    pub(super) cursor: usize,
    pub(super) phase: Phase,
    pub(super) highlight: HighlightColor,
}

impl<T: Element> Model<T> {
    /// Create a model starting on the help screen with the cursor on the first item.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EmptySequence`] when `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, EditorError> {
        if items.is_empty() {
            return Err(EditorError::EmptySequence);
        }
        Ok(Self {
            items,
            cursor: 0,
            phase: Phase::Help,
            highlight: HighlightColor::default(),
        })
    }

    /// Skip the help screen and start browsing directly.
    #[must_use]
    pub fn without_help(mut self) -> Self {
        if self.phase == Phase::Help {
            self.phase = Phase::Browsing;
        }
        self
    }

    #[must_use]
    pub const fn with_highlight(mut self, highlight: HighlightColor) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Foreground used for the item under the cursor.
    pub const fn highlight(&self) -> HighlightColor {
        self.highlight
    }

    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    pub const fn prompt(&self) -> Option<&Prompt> {
        match &self.phase {
            Phase::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// True once the session has been confirmed or interrupted.
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done | Phase::Interrupted)
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Done => Some(Outcome::Confirmed),
            Phase::Interrupted => Some(Outcome::Interrupted),
            _ => None,
        }
    }
}

// Needed so the event loop can move the model through `update`.
impl<T: Element> Default for Model<T> {
    fn default() -> Self {
        Self {
            items: vec![T::default()],
            cursor: 0,
            phase: Phase::Help,
            highlight: HighlightColor::default(),
        }
    }
}

/// Wrap a cursor back into `0..len` using `(len + index) % len`.
///
/// Euclidean remainder so an index of `-1` from moving left off the start
/// lands on the last item.
pub fn normalize_cursor(len: usize, index: isize) -> usize {
    debug_assert!(len > 0, "sequence must never be empty");
    let len = isize::try_from(len).unwrap_or(isize::MAX);
    usize::try_from((len + index).rem_euclid(len)).unwrap_or(0)
}
