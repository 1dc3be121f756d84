//! Ordered item storage with a pluggable display projection.
//!
//! [`ItemList`] owns its items and a projection `Fn(&T) -> Option<String>`
//! that maps each item to the text used for matching and rendering. The
//! projection stands in for the original notion of a "display member": a
//! caller can point the list at any field of its item type without the list
//! knowing the type's shape.
//!
//! # Invariants
//!
//! 1. Item order is insertion order and is never reordered by reads.
//! 2. `display_text` is a pure read; it never mutates the list.
//! 3. A projection may yield `None` (no display string) or `Some("")`;
//!    both are preserved as-is, not coalesced.
//!
//! # Example
//!
//! ```
//! use pickbox_items::ItemList;
//!
//! struct Entry { label: Option<String> }
//!
//! let mut list = ItemList::with_projection(|e: &Entry| e.label.clone());
//! list.push(Entry { label: Some("alpha".into()) });
//! list.push(Entry { label: None });
//!
//! assert_eq!(list.display_text(0), Some("alpha".to_string()));
//! assert_eq!(list.display_text(1), None);
//! ```

use std::fmt;

/// Maps an item to its display string, or `None` when the item has no
/// textual form.
pub type Projection<T> = Box<dyn Fn(&T) -> Option<String>>;

/// Ordered collection of items with a display projection.
pub struct ItemList<T> {
    items: Vec<T>,
    projection: Projection<T>,
}

impl<T> fmt::Debug for ItemList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemList")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display + 'static> ItemList<T> {
    /// Create an empty list whose display string is each item's own
    /// string conversion.
    #[must_use]
    pub fn new() -> Self {
        Self::with_projection(|item: &T| Some(item.to_string()))
    }
}

impl<T: fmt::Display + 'static> Default for ItemList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ItemList<T> {
    /// Create an empty list with an injected display projection.
    #[must_use]
    pub fn with_projection(projection: impl Fn(&T) -> Option<String> + 'static) -> Self {
        Self {
            items: Vec::new(),
            projection: Box::new(projection),
        }
    }

    /// Replace the display projection. Items are untouched.
    pub fn set_projection(&mut self, projection: impl Fn(&T) -> Option<String> + 'static) {
        self.projection = Box::new(projection);
    }
}

impl<T> ItemList<T> {
    /// Append an item at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert an item at `index`, shifting later items up.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`, shifting later items down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Borrow the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The display string of the item at `index`.
    ///
    /// Returns `None` both for an out-of-range index and for an in-range
    /// item whose projection yields no text; callers that need to tell the
    /// two apart should bounds-check with [`len`](Self::len) first.
    #[must_use]
    pub fn display_text(&self, index: usize) -> Option<String> {
        self.items.get(index).and_then(|item| (self.projection)(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn new_list_is_empty() {
        let list: ItemList<String> = ItemList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn default_projection_uses_display() {
        let mut list = ItemList::new();
        list.push(42_u32);
        assert_eq!(list.display_text(0), Some("42".to_string()));
    }

    #[test]
    fn custom_projection() {
        struct Entry {
            value: Option<&'static str>,
        }

        let mut list = ItemList::with_projection(|e: &Entry| e.value.map(String::from));
        list.push(Entry { value: Some("abc") });
        list.push(Entry { value: Some("") });
        list.push(Entry { value: None });

        assert_eq!(list.display_text(0), Some("abc".to_string()));
        assert_eq!(list.display_text(1), Some(String::new()));
        assert_eq!(list.display_text(2), None);
    }

    #[test]
    fn set_projection_changes_display_text() {
        let mut list = ItemList::new();
        list.push("abc".to_string());
        assert_eq!(list.display_text(0), Some("abc".to_string()));

        list.set_projection(|s: &String| Some(s.to_uppercase()));
        assert_eq!(list.display_text(0), Some("ABC".to_string()));
    }

    // ── Ordering ────────────────────────────────────────────────────

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = ItemList::new();
        list.push("b".to_string());
        list.push("a".to_string());
        list.push("c".to_string());

        let collected: Vec<_> = list.iter().cloned().collect();
        assert_eq!(collected, vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_shifts_later_items() {
        let mut list = ItemList::new();
        list.push("a".to_string());
        list.push("c".to_string());
        list.insert(1, "b".to_string());

        assert_eq!(list.display_text(1), Some("b".to_string()));
        assert_eq!(list.display_text(2), Some("c".to_string()));
    }

    #[test]
    fn remove_returns_item_and_shifts() {
        let mut list = ItemList::new();
        list.push("a".to_string());
        list.push("b".to_string());
        list.push("c".to_string());

        let removed = list.remove(1);
        assert_eq!(removed, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.display_text(1), Some("c".to_string()));
    }

    #[test]
    fn clear_removes_everything() {
        let mut list = ItemList::new();
        list.push("a".to_string());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.display_text(0), None);
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[test]
    fn get_out_of_range_is_none() {
        let list: ItemList<String> = ItemList::new();
        assert!(list.get(0).is_none());
    }

    #[test]
    fn display_text_out_of_range_is_none() {
        let mut list = ItemList::new();
        list.push("a".to_string());
        assert_eq!(list.display_text(1), None);
    }

    #[test]
    fn debug_does_not_require_item_debug() {
        struct Opaque;
        let mut list = ItemList::with_projection(|_: &Opaque| None);
        list.push(Opaque);
        let rendered = format!("{list:?}");
        assert!(rendered.contains("len: 1"));
    }
}
