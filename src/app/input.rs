use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::Phase;
use crate::app::{Message, Model};

/// Translate a terminal event into a message for the current phase.
pub(super) fn handle_event<T>(event: &Event, model: &Model<T>) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Resize(_, _) => Some(Message::Redraw),
        _ => None,
    }
}

pub(super) fn handle_key<T>(key: KeyEvent, model: &Model<T>) -> Option<Message> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Interrupt);
    }

    match &model.phase {
        Phase::Help => Some(Message::DismissHelp),
        Phase::Browsing => match key.code {
            KeyCode::Right => Some(Message::MoveRight),
            KeyCode::Left => Some(Message::MoveLeft),
            KeyCode::Char(' ') => Some(Message::EditCurrent),
            KeyCode::Tab => Some(Message::AppendNew),
            KeyCode::Delete | KeyCode::Backspace => Some(Message::DeleteCurrent),
            KeyCode::Enter => Some(Message::Confirm),
            _ => None,
        },
        Phase::Prompt(_) => match key.code {
            KeyCode::Enter => Some(Message::PromptSubmit),
            KeyCode::Backspace => Some(Message::PromptBackspace),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::PromptInput(c))
            }
            _ => None,
        },
        Phase::Done | Phase::Interrupted => None,
    }
}
