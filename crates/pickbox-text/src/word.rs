//! Word-boundary deletion, the transform behind Ctrl+Backspace.
//!
//! With an active selection the gesture removes exactly the selected span.
//! With a bare caret it walks backward twice: first over the run of
//! separators touching the caret, then over the run of word chars before
//! them, and removes the whole walked span in one edit. Repeating the
//! gesture therefore eats one word (plus its trailing separators) per
//! invocation until the text before the caret is gone.
//!
//! # Invariants
//!
//! 1. Pure transform: input text is never mutated in place.
//! 2. The returned selection is always a caret inside the returned text.
//! 3. An empty buffer, or a caret at offset 0, is a fixed point.

use crate::selection::Selection;

/// Whether `c` ends a word for the deletion gesture.
///
/// Whitespace and ASCII punctuation (so delimiters like `-`, `.`, `/`)
/// separate words; everything else is a word char.
#[must_use]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Delete the selection, or the word before the caret, returning the new
/// text and the collapsed caret.
///
/// `selection` offsets are char-based and are clamped to `text` before the
/// edit, so out-of-range spans cannot index past the buffer.
#[must_use]
pub fn delete_word_before_cursor(text: &str, selection: Selection) -> (String, Selection) {
    let chars: Vec<char> = text.chars().collect();
    let sel = selection.clamped_to(chars.len());

    if !sel.is_caret() {
        let mut out: String = chars[..sel.start].iter().collect();
        out.extend(&chars[sel.end()..]);
        tracing::trace!(from = sel.start, to = sel.end(), "deleted selection");
        return (out, Selection::caret(sel.start));
    }

    let caret = sel.start;
    let mut boundary = caret;
    while boundary > 0 && is_word_separator(chars[boundary - 1]) {
        boundary -= 1;
    }
    while boundary > 0 && !is_word_separator(chars[boundary - 1]) {
        boundary -= 1;
    }
    if boundary == caret {
        return (text.to_string(), sel);
    }

    let mut out: String = chars[..boundary].iter().collect();
    out.extend(&chars[caret..]);
    tracing::trace!(from = boundary, to = caret, "deleted word span");
    (out, Selection::caret(boundary))
}
