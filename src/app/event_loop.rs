use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use super::input::handle_event;
use crate::app::{App, Model, Outcome, update};
use crate::element::Element;

/// Raw mode and alternate screen for the length of one edit session.
///
/// Dropping the session restores the terminal, so every exit path out of
/// [`App::run`] (including `?` and panics) leaves the console usable.
pub(super) struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub(super) fn acquire() -> Result<Self> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal: listedit requires an interactive terminal")?;
        Ok(Self { terminal })
    }

    pub(super) const fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = execute!(stdout(), ResetColor);
        ratatui::restore();
    }
}

impl App {
    /// Run an interactive session over `items`, editing them in place.
    ///
    /// The sequence is handed back in `items` however the session ends,
    /// including on a terminal error.
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty, or if terminal initialization
    /// or reading events fails.
    pub fn run<T: Element>(&self, items: &mut Vec<T>) -> Result<Outcome> {
        let mut model = Model::new(std::mem::take(items))?.with_highlight(self.highlight);
        if !self.show_help {
            model = model.without_help();
        }
        info!(
            len = model.items().len(),
            kind = T::TYPE_LABEL,
            "edit session started"
        );

        let result = TerminalSession::acquire()
            .and_then(|mut session| Self::event_loop(session.terminal(), &mut model));

        let outcome = model.outcome();
        *items = model.into_items();
        result?;

        let outcome = outcome.unwrap_or(Outcome::Interrupted);
        info!(len = items.len(), ?outcome, "edit session ended");
        Ok(outcome)
    }

    fn event_loop<T: Element>(terminal: &mut DefaultTerminal, model: &mut Model<T>) -> Result<()> {
        let mut needs_render = true;

        while !model.is_finished() {
            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            // Blocks until the next event; there is nothing to do in between.
            let event = event::read()?;
            if let Some(msg) = handle_event(&event, model) {
                debug!(?msg, cursor = model.cursor(), "dispatch");
                *model = update(std::mem::take(model), msg);
                needs_render = true;
            }
        }
        Ok(())
    }
}

/// Block until a single key is pressed, outside of an edit session.
///
/// # Errors
///
/// Returns an error if raw mode cannot be toggled or reading events fails.
pub fn wait_for_keypress() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    disable_raw_mode().context("Failed to disable raw mode")?;
    result.context("Failed to read keypress")
}
