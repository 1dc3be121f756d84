#![forbid(unsafe_code)]

//! Text editing primitives for pickbox.
//!
//! A [`Selection`] describes a caret or a selected span in char offsets,
//! [`word`] holds the word-boundary deletion transform behind the
//! Ctrl+Backspace gesture, and [`EditBuffer`] ties text and selection
//! together for the widget layer.

pub mod buffer;
pub mod selection;
pub mod word;

pub use buffer::EditBuffer;
pub use selection::Selection;
pub use word::{delete_word_before_cursor, is_word_separator};
