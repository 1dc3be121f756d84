#![forbid(unsafe_code)]

//! Combo-box widget state for pickbox.
//!
//! [`ComboBox`] owns the item list and the editable text of a combo box
//! and exposes the behaviors a host UI framework wires up to rendering and
//! input: property setters with change events, circular item search, and
//! the Ctrl+Backspace editing gesture. Rendering and focus handling stay
//! with the host.

pub mod combo_box;
pub mod event;
pub mod events;

pub use combo_box::{ComboBox, ComboBoxEvent, SelectedIndexError};
pub use event::{KeyCode, KeyEvent, Modifiers};
pub use events::{EventEmitter, Subscription};
