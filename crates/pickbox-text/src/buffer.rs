//! Mutable text-plus-selection state for the widget layer.
//!
//! `EditBuffer` keeps the selection inside the text at all times: every
//! mutation clamps rather than trusting the caller, so downstream code can
//! index with the stored selection without re-checking bounds.

use crate::selection::Selection;
use crate::word;

/// An editable string with a caret/selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    selection: Selection,
}

impl EditBuffer {
    /// An empty buffer with the caret at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the caret at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = Selection::caret(text.chars().count());
        Self {
            text,
            selection: caret,
        }
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the whole text, clamping the selection to the new bounds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = self.selection.clamped_to(self.char_len());
    }

    /// Select `len` chars from `start`, clamped to the text.
    pub fn select(&mut self, start: usize, len: usize) {
        self.selection = Selection::new(start, len).clamped_to(self.char_len());
    }

    /// The selected substring (empty for a caret).
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.len)
            .collect()
    }

    /// Replace the selected span with `replacement`; the caret lands after
    /// the inserted text.
    pub fn replace_selection(&mut self, replacement: &str) {
        let sel = self.selection;
        let mut out: String = self.text.chars().take(sel.start).collect();
        out.push_str(replacement);
        out.extend(self.text.chars().skip(sel.end()));
        self.text = out;
        self.selection = Selection::caret(sel.start + replacement.chars().count());
    }

    /// Apply the Ctrl+Backspace transform in place.
    ///
    /// Returns whether the text changed.
    pub fn delete_word_before_cursor(&mut self) -> bool {
        let (text, selection) = word::delete_word_before_cursor(&self.text, self.selection);
        let changed = text != self.text;
        self.text = text;
        self.selection = selection;
        changed
    }
}
