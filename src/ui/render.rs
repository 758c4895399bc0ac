use std::fmt::Display;

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, Phase, Prompt};
use crate::element::Element;

use super::style::{HighlightColor, item_style, text_style};

/// Key binding manual shown before editing starts.
pub const HELP_LINES: [&str; 7] = [
    "Press \u{2192} and \u{2190} to move pointer",
    "Press SPACE to change current value",
    "Press TAB to add new value",
    "Press DEL or BACKSPACE to clear current value",
    "Press ENTER to complete edition",
    "",
    "(Press any key to start)",
];

/// Separator written after every item.
const ITEM_SEPARATOR: &str = "  ";

/// Render the whole screen for the current phase.
///
/// Each frame starts from a cleared buffer, so every phase redraws fully.
pub fn render<T: Element>(model: &Model<T>, frame: &mut Frame) {
    let area = frame.area();
    match model.phase() {
        Phase::Help => render_help(frame, area),
        Phase::Prompt(prompt) => render_prompt::<T>(prompt, frame, area),
        Phase::Browsing | Phase::Done | Phase::Interrupted => {
            let line = items_line(model.items(), model.cursor(), model.highlight());
            let paragraph = Paragraph::new(line).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

/// Build the item line: every item followed by two spaces, the one at
/// `highlight_index` in the highlight color and the rest in gray.
pub fn items_line<T: Display>(
    items: &[T],
    highlight_index: usize,
    highlight: HighlightColor,
) -> Line<'static> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            Span::styled(
                format!("{item}{ITEM_SEPARATOR}"),
                item_style(idx == highlight_index, highlight),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

/// Prompt text shown before the typed value, e.g. `New [int] Value: `.
pub fn prompt_label<T: Element>() -> String {
    format!("New [{}] Value: ", T::TYPE_LABEL)
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();
    frame.render_widget(Paragraph::new(lines).style(text_style()), area);
}

fn render_prompt<T: Element>(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let label = prompt_label::<T>();
    let text = format!("{label}{}", prompt.input);
    frame.render_widget(Paragraph::new(text).style(text_style()), area);

    // Showing the cursor only here keeps it hidden everywhere else.
    let width = UnicodeWidthStr::width(label.as_str()) + UnicodeWidthStr::width(prompt.input.as_str());
    let max_x = area.width.saturating_sub(1);
    let x = u16::try_from(width).unwrap_or(u16::MAX).min(max_x);
    frame.set_cursor_position(Position::new(area.x + x, area.y));
}
