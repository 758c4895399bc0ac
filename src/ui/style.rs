//! Colors for the item line.

use ratatui::style::{Color, Style};

/// Foreground used for every item that is not under the cursor.
pub const ITEM_COLOR: Color = Color::Gray;

/// Foreground for the item under the cursor.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    #[default]
    Green,
    Yellow,
    Cyan,
    Magenta,
    Red,
    Blue,
}

impl HighlightColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "cyan" => Some(Self::Cyan),
            "magenta" => Some(Self::Magenta),
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Cyan => Color::Cyan,
            Self::Magenta => Color::Magenta,
            Self::Red => Color::Red,
            Self::Blue => Color::Blue,
        }
    }
}

/// Style for one item, depending on whether the cursor is on it.
pub fn item_style(highlighted: bool, highlight: HighlightColor) -> Style {
    if highlighted {
        Style::default().fg(highlight.color())
    } else {
        Style::default().fg(ITEM_COLOR)
    }
}

/// Style for the help screen and the value prompt.
pub fn text_style() -> Style {
    Style::default().fg(Color::Reset)
}
