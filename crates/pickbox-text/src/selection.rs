//! Caret and selection spans over a text buffer.
//!
//! Offsets count `char`s, not bytes. A zero-length selection is a caret.
//!
//! # Invariants
//!
//! 1. `start` and `len` are always non-negative by construction (`usize`).
//! 2. [`clamped_to`](Selection::clamped_to) never yields a span that ends
//!    past the buffer it was clamped against.

/// A span of selected text, or a caret when `len == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// First selected char offset (the caret position when `len == 0`).
    pub start: usize,
    /// Number of selected chars.
    pub len: usize,
}

impl Selection {
    /// A selection covering `len` chars from `start`.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// A collapsed selection (caret) at `pos`.
    #[must_use]
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, len: 0 }
    }

    /// One past the last selected char offset.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether this is a collapsed selection.
    #[must_use]
    pub fn is_caret(&self) -> bool {
        self.len == 0
    }

    /// Clamp the span so it fits a buffer of `text_len` chars.
    ///
    /// The start is pulled back to `text_len` first, then the length is
    /// shortened to what remains.
    #[must_use]
    pub fn clamped_to(self, text_len: usize) -> Self {
        let start = self.start.min(text_len);
        Self {
            start,
            len: self.len.min(text_len - start),
        }
    }
}
