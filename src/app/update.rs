use tracing::debug;

use crate::app::Model;
use crate::app::model::{Phase, Prompt, PromptTarget, normalize_cursor};
use crate::element::Element;

/// All events the editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Leave the help screen (the key itself is discarded)
    DismissHelp,

    // Browsing
    /// Move the cursor one item right
    MoveRight,
    /// Move the cursor one item left
    MoveLeft,
    /// Prompt for a value replacing the current item
    EditCurrent,
    /// Prompt for a value appended to the end
    AppendNew,
    /// Remove the current item unless it is the only one
    DeleteCurrent,
    /// Finish editing
    Confirm,

    // Prompt
    /// Type a character into the prompt
    PromptInput(char),
    /// Erase the last typed character
    PromptBackspace,
    /// Coerce the typed text and apply it
    PromptSubmit,

    /// Terminal resized or otherwise needs repainting
    Redraw,
    /// Abort the session (Ctrl+C)
    Interrupt,
}

/// Apply one message to the model.
///
/// The cursor is renormalized after every message, whether or not it moved.
pub fn update<T: Element>(mut model: Model<T>, msg: Message) -> Model<T> {
    let mut index = isize::try_from(model.cursor).unwrap_or(0);
    let browsing = model.phase == Phase::Browsing;

    match msg {
        Message::Interrupt => model.phase = Phase::Interrupted,
        Message::DismissHelp if model.phase == Phase::Help => model.phase = Phase::Browsing,

        Message::MoveRight if browsing => index += 1,
        Message::MoveLeft if browsing => index -= 1,
        Message::EditCurrent if browsing => {
            model.phase = Phase::Prompt(Prompt::new(PromptTarget::Replace));
        }
        Message::AppendNew if browsing => {
            model.phase = Phase::Prompt(Prompt::new(PromptTarget::Append));
        }
        Message::DeleteCurrent if browsing => {
            if model.items.len() != 1 {
                model.items.remove(model.cursor);
            }
        }
        Message::Confirm if browsing => model.phase = Phase::Done,

        Message::PromptInput(c) => {
            if let Phase::Prompt(prompt) = &mut model.phase {
                prompt.input.push(c);
            }
        }
        Message::PromptBackspace => {
            if let Phase::Prompt(prompt) = &mut model.phase {
                prompt.input.pop();
            }
        }
        Message::PromptSubmit => submit_prompt(&mut model),

        // Redraw, and anything that does not apply to the current phase
        _ => {}
    }

    model.cursor = normalize_cursor(model.items.len(), index);
    model
}

fn submit_prompt<T: Element>(model: &mut Model<T>) {
    let Phase::Prompt(prompt) = std::mem::replace(&mut model.phase, Phase::Browsing) else {
        return;
    };
    let value = T::try_coerce(&prompt.input).unwrap_or_else(|| {
        debug!(input = %prompt.input, kind = T::TYPE_LABEL, "coercion failed, using default");
        T::default()
    });
    match prompt.target {
        PromptTarget::Replace => model.items[model.cursor] = value,
        PromptTarget::Append => model.items.push(value),
    }
}
