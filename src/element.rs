//! Element types the editor can hold.
//!
//! An [`Element`] is any scalar that can be shown as text and coerced back
//! from a line the user typed. Coercion never fails: text that does not
//! parse becomes the type's default value.

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// A value that can live in the edited sequence.
pub trait Element: Clone + Default + Display + FromStr {
    /// Name shown in the value prompt, e.g. `New [int] Value: `.
    const TYPE_LABEL: &'static str;

    /// Convert a typed line, or `None` when it has the wrong shape.
    fn try_coerce(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    /// Coerce a typed line into a value, falling back to `Self::default()`.
    fn coerce(text: &str) -> Self {
        Self::try_coerce(text).unwrap_or_default()
    }
}

impl Element for i64 {
    const TYPE_LABEL: &'static str = "int";
}

impl Element for f64 {
    const TYPE_LABEL: &'static str = "float";
}

impl Element for bool {
    const TYPE_LABEL: &'static str = "bool";

    // Case-insensitive, unlike `bool::from_str`
    fn try_coerce(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl Element for String {
    const TYPE_LABEL: &'static str = "text";

    fn try_coerce(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

/// Element type selectable from the command line.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    #[default]
    Int,
    Float,
    Text,
    Bool,
}

impl ElementKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bool => "bool",
        }
    }

    /// Initial items used when none are configured.
    pub const fn default_items(self) -> &'static str {
        match self {
            Self::Bool => "true,false",
            Self::Int | Self::Float | Self::Text => "26,10,-13,17,3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "text" => Some(Self::Text),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to build an initial sequence from a comma-separated list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemsError {
    #[error("item list is empty")]
    Empty,
    #[error("item {position} ({text:?}) is not a valid {kind}")]
    Invalid {
        position: usize,
        text: String,
        kind: &'static str,
    },
}

/// Parse a comma-separated list such as `26,10,-13` into elements.
///
/// # Errors
///
/// Returns [`ItemsError::Empty`] when the list has no items and
/// [`ItemsError::Invalid`] for the first item that does not parse.
pub fn parse_items<T: Element>(list: &str) -> Result<Vec<T>, ItemsError> {
    if list.trim().is_empty() {
        return Err(ItemsError::Empty);
    }
    list.split(',')
        .enumerate()
        .map(|(idx, raw)| {
            T::try_coerce(raw.trim()).ok_or_else(|| ItemsError::Invalid {
                position: idx + 1,
                text: raw.trim().to_string(),
                kind: T::TYPE_LABEL,
            })
        })
        .collect()
}

/// Join elements the way the final report prints them: `a, b, c`.
pub fn join_items<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
