// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. element::ElementKind)
    clippy::module_name_repetitions
)]

//! # Listedit
//!
//! An interactive terminal editor for an ordered list of values.
//!
//! The cursor moves over the list with the arrow keys; the highlighted
//! value can be replaced, new values appended and entries deleted, with a
//! full redraw after every key.
//!
//! ## Architecture
//!
//! Listedit uses The Elm Architecture (TEA) pattern:
//! - **Model**: The sequence, cursor and current screen
//! - **Message**: Key actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Editor state and event loop
//! - [`element`]: Element types and text coercion
//! - [`config`]: Saved default flags
//! - [`report`]: Before/after summary
//! - [`ui`]: Rendering and colors

pub mod app;
pub mod config;
pub mod element;
pub mod report;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, Outcome, update};
    pub use crate::element::{Element, ElementKind};
}
