#![forbid(unsafe_code)]

//! Ordered item storage and circular string search for pickbox.
//!
//! An [`ItemList`] holds opaque items in insertion order and derives a
//! *display string* for each one through a pluggable projection. The
//! [`find`] module adds the combo-box lookup primitives on top: wrapped
//! prefix search and wrapped exact search.

pub mod find;
pub mod list;

pub use find::StartIndexError;
pub use list::ItemList;
