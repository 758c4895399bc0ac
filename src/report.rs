//! Before/after summary printed once a session is confirmed.

use std::fmt::Display;

use crate::element::join_items;

/// Format the two report lines, without a trailing newline.
pub fn format_report<T: Display>(original: &[T], edited: &[T]) -> String {
    format!(
        "Original: {}\nEdited: {}",
        join_items(original),
        join_items(edited)
    )
}
