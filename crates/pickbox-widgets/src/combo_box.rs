//! Combo-box widget state.
//!
//! `ComboBox<T>` is the non-visual half of a combo box: an [`ItemList`]
//! of entries, an [`EditBuffer`] for the text portion, a selected-index
//! property, and change events for both. A host framework renders the
//! state and feeds key presses into [`handle_key`](ComboBox::handle_key).
//!
//! # Invariants
//!
//! 1. `selected_index`, when `Some`, always points at a live item.
//! 2. Setting a property to its current value is a no-op: no state change,
//!    no events.
//! 3. Events fire after the state mutation completes; subscribers observe
//!    the new state.
//! 4. Searching never mutates widget state.
//!
//! # Example
//!
//! ```
//! use pickbox_widgets::combo_box::ComboBox;
//! use pickbox_widgets::event::{KeyCode, KeyEvent};
//!
//! let mut combo: ComboBox<String> = ComboBox::new();
//! combo.push_item("alpha".to_string());
//! combo.push_item("beta".to_string());
//!
//! combo.set_selected_index(Some(1)).unwrap();
//! assert_eq!(combo.text(), "beta");
//!
//! assert!(combo.handle_key(KeyEvent::ctrl(KeyCode::Backspace)));
//! assert_eq!(combo.text(), "");
//! ```

use std::fmt;

use pickbox_items::{ItemList, StartIndexError};
use pickbox_text::{EditBuffer, Selection};

use crate::event::{KeyCode, KeyEvent, Modifiers};
use crate::events::{EventEmitter, Subscription};

/// Change notifications published by [`ComboBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboBoxEvent {
    /// The text portion changed (programmatically or via a key gesture).
    TextChanged,
    /// The selected index changed.
    SelectedIndexChanged,
}

/// A selected index was set past the end of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedIndexError {
    /// The offending index.
    pub index: usize,
    /// Item count at the time of the call.
    pub len: usize,
}

impl fmt::Display for SelectedIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "selected index {} out of range for a list of {} items",
            self.index, self.len
        )
    }
}

impl std::error::Error for SelectedIndexError {}

/// Non-visual combo-box state.
pub struct ComboBox<T> {
    items: ItemList<T>,
    editor: EditBuffer,
    selected_index: Option<usize>,
    events: EventEmitter<ComboBoxEvent>,
}

impl<T> fmt::Debug for ComboBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBox")
            .field("items", &self.items)
            .field("text", &self.editor.text())
            .field("selected_index", &self.selected_index)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display + 'static> ComboBox<T> {
    /// An empty combo box whose items display via their own string
    /// conversion.
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(ItemList::new())
    }
}

impl<T: fmt::Display + 'static> Default for ComboBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ComboBox<T> {
    /// An empty combo box with an injected display projection (the
    /// "display member" analog).
    #[must_use]
    pub fn with_projection(projection: impl Fn(&T) -> Option<String> + 'static) -> Self {
        Self::from_items(ItemList::with_projection(projection))
    }
}

impl<T> ComboBox<T> {
    /// Wrap an existing item list.
    #[must_use]
    pub fn from_items(items: ItemList<T>) -> Self {
        Self {
            items,
            editor: EditBuffer::new(),
            selected_index: None,
            events: EventEmitter::new(),
        }
    }

    // ── Items ───────────────────────────────────────────────────────

    /// The item list (read-only; mutate through the widget so the
    /// selection stays consistent).
    #[must_use]
    pub fn items(&self) -> &ItemList<T> {
        &self.items
    }

    /// Append an item at the end.
    pub fn push_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert an item at `index`. The selection follows its item: an
    /// insertion at or before the selected index shifts it up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > items().len()`.
    pub fn insert_item(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        if let Some(selected) = self.selected_index
            && index <= selected
        {
            self.selected_index = Some(selected + 1);
        }
    }

    /// Remove and return the item at `index`.
    ///
    /// Removing the selected item clears the selection (and fires
    /// [`ComboBoxEvent::SelectedIndexChanged`]); removing an earlier item
    /// shifts the selection down so it keeps pointing at the same entry.
    /// The text is left as-is either way.
    ///
    /// # Panics
    ///
    /// Panics if `index >= items().len()`.
    pub fn remove_item(&mut self, index: usize) -> T {
        let removed = self.items.remove(index);
        match self.selected_index {
            Some(selected) if selected == index => {
                self.selected_index = None;
                self.events.emit(&ComboBoxEvent::SelectedIndexChanged);
            }
            Some(selected) if selected > index => {
                self.selected_index = Some(selected - 1);
            }
            _ => {}
        }
        removed
    }

    /// Remove all items, clearing the selection.
    pub fn clear_items(&mut self) {
        self.items.clear();
        if self.selected_index.take().is_some() {
            self.events.emit(&ComboBoxEvent::SelectedIndexChanged);
        }
    }

    // ── Text property ───────────────────────────────────────────────

    /// The text portion.
    #[must_use]
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Set the text portion, placing the caret at the end.
    ///
    /// Setting the current value again is a no-op and fires nothing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.editor.text() == text {
            return;
        }
        self.editor = EditBuffer::with_text(text);
        self.events.emit(&ComboBoxEvent::TextChanged);
    }

    /// Current caret/selection in the text portion.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.editor.selection()
    }

    /// Select `len` chars starting at `start` (clamped to the text).
    pub fn select(&mut self, start: usize, len: usize) {
        self.editor.select(start, len);
    }

    /// The selected substring of the text portion.
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.editor.selected_text()
    }

    // ── Selected index property ─────────────────────────────────────

    /// The selected item index, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index.and_then(|index| self.items.get(index))
    }

    /// Select an item by index (`None` clears the selection).
    ///
    /// On change the text portion is replaced with the selected item's
    /// display string (empty for `None` or for an item without one), then
    /// [`ComboBoxEvent::TextChanged`] (if the text actually changed) and
    /// [`ComboBoxEvent::SelectedIndexChanged`] fire, in that order.
    ///
    /// # Errors
    ///
    /// [`SelectedIndexError`] when `index` is `Some(i)` with
    /// `i >= items().len()`; the state is untouched.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> Result<(), SelectedIndexError> {
        if let Some(i) = index
            && i >= self.items.len()
        {
            return Err(SelectedIndexError {
                index: i,
                len: self.items.len(),
            });
        }
        if index == self.selected_index {
            return Ok(());
        }

        self.selected_index = index;
        let text = index
            .and_then(|i| self.items.display_text(i))
            .unwrap_or_default();
        if self.editor.text() != text {
            self.editor = EditBuffer::with_text(text);
            self.events.emit(&ComboBoxEvent::TextChanged);
        }
        self.events.emit(&ComboBoxEvent::SelectedIndexChanged);
        Ok(())
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Prefix-search the items from the beginning.
    ///
    /// # Errors
    ///
    /// Never fails without a start cursor; the `Result` mirrors
    /// [`find_string_from`](Self::find_string_from).
    pub fn find_string(&self, query: Option<&str>) -> Result<Option<usize>, StartIndexError> {
        self.items.find_string(query, None)
    }

    /// Prefix-search the items, wrapping from one past `start`.
    ///
    /// # Errors
    ///
    /// [`StartIndexError`] when `start` is past the end of a non-empty
    /// list.
    pub fn find_string_from(
        &self,
        query: Option<&str>,
        start: Option<usize>,
    ) -> Result<Option<usize>, StartIndexError> {
        self.items.find_string(query, start)
    }

    /// Exact-search the items from the beginning, ignoring case.
    ///
    /// # Errors
    ///
    /// Never fails without a start cursor; the `Result` mirrors
    /// [`find_string_exact_from`](Self::find_string_exact_from).
    pub fn find_string_exact(&self, query: Option<&str>) -> Result<Option<usize>, StartIndexError> {
        self.items.find_string_exact(query, None, true)
    }

    /// Exact-search the items, wrapping from one past `start`.
    ///
    /// # Errors
    ///
    /// [`StartIndexError`] when `start` is past the end of a non-empty
    /// list.
    pub fn find_string_exact_from(
        &self,
        query: Option<&str>,
        start: Option<usize>,
        ignore_case: bool,
    ) -> Result<Option<usize>, StartIndexError> {
        self.items.find_string_exact(query, start, ignore_case)
    }

    // ── Events and input ────────────────────────────────────────────

    /// Subscribe to change notifications.
    #[must_use = "dropping the Subscription immediately unsubscribes"]
    pub fn subscribe(&self, callback: impl Fn(&ComboBoxEvent) + 'static) -> Subscription {
        self.events.subscribe(callback)
    }

    /// Feed a key press to the widget.
    ///
    /// Ctrl+Backspace deletes the selection (or the word before the
    /// caret) and reports the key as handled even when nothing changed,
    /// so the host does not double-process it. Every other key is left to
    /// the host.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace if key.modifiers.contains(Modifiers::CTRL) => {
                let changed = self.editor.delete_word_before_cursor();
                tracing::debug!(changed, "ctrl+backspace");
                if changed {
                    self.events.emit(&ComboBoxEvent::TextChanged);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct DataEntry {
        value: Option<&'static str>,
    }

    fn combo_with_display_member() -> ComboBox<DataEntry> {
        let mut combo = ComboBox::with_projection(|e: &DataEntry| e.value.map(String::from));
        combo.push_item(DataEntry { value: Some("Value1") });
        combo.push_item(DataEntry { value: Some("Value2") });
        combo
    }

    /// Combo box primed for the Ctrl+Backspace tests: text set, caret
    /// placed relative to the end of the text.
    fn combo_for_ctrl_backspace(text: &str, caret_relative_to_end: isize) -> ComboBox<String> {
        let mut combo: ComboBox<String> = ComboBox::new();
        combo.set_text(text);
        let caret = text
            .chars()
            .count()
            .saturating_add_signed(caret_relative_to_end);
        combo.select(caret, 0);
        combo
    }

    fn ctrl_backspace() -> KeyEvent {
        KeyEvent::ctrl(KeyCode::Backspace)
    }

    fn record_events<T>(combo: &ComboBox<T>) -> (Rc<RefCell<Vec<ComboBoxEvent>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let sub = combo.subscribe(move |event| seen_clone.borrow_mut().push(*event));
        (seen, sub)
    }

    // ── Selected index property ─────────────────────────────────────

    #[test]
    fn set_selected_index_updates_text_from_display_member() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(0)).unwrap();
        assert_eq!(combo.selected_index(), Some(0));
        assert_eq!(combo.text(), "Value1");

        combo.set_selected_index(Some(1)).unwrap();
        assert_eq!(combo.text(), "Value2");
    }

    #[test]
    fn set_selected_index_none_clears_text() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(1)).unwrap();
        combo.set_selected_index(None).unwrap();
        assert_eq!(combo.selected_index(), None);
        assert!(combo.selected_item().is_none());
        assert_eq!(combo.text(), "");
    }

    #[test]
    fn set_selected_index_same_value_is_silent() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(1)).unwrap();

        let (seen, _sub) = record_events(&combo);
        combo.set_selected_index(Some(1)).unwrap();
        assert!(seen.borrow().is_empty());
        assert_eq!(combo.text(), "Value2");
    }

    #[test]
    fn set_selected_index_fires_text_then_index() {
        let mut combo = combo_with_display_member();
        let (seen, _sub) = record_events(&combo);

        combo.set_selected_index(Some(0)).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![ComboBoxEvent::TextChanged, ComboBoxEvent::SelectedIndexChanged]
        );
    }

    #[test]
    fn set_selected_index_out_of_range_errors_and_leaves_state() {
        let mut combo = combo_with_display_member();
        let err = combo.set_selected_index(Some(2)).unwrap_err();
        assert_eq!(err, SelectedIndexError { index: 2, len: 2 });
        assert_eq!(combo.selected_index(), None);

        let empty: Result<(), _> = ComboBox::<String>::new().set_selected_index(Some(0));
        assert!(empty.is_err());
    }

    #[test]
    fn item_without_display_string_selects_to_empty_text() {
        let mut combo = combo_with_display_member();
        combo.push_item(DataEntry { value: None });
        combo.set_selected_index(Some(2)).unwrap();
        assert_eq!(combo.text(), "");
    }

    // ── Item mutation vs. selection ─────────────────────────────────

    #[test]
    fn removing_selected_item_clears_selection() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(1)).unwrap();

        let (seen, _sub) = record_events(&combo);
        combo.remove_item(1);
        assert_eq!(combo.selected_index(), None);
        assert_eq!(*seen.borrow(), vec![ComboBoxEvent::SelectedIndexChanged]);
        // Text keeps its last value.
        assert_eq!(combo.text(), "Value2");
    }

    #[test]
    fn removing_earlier_item_shifts_selection() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(1)).unwrap();
        combo.remove_item(0);
        assert_eq!(combo.selected_index(), Some(0));
        assert_eq!(combo.selected_item().unwrap().value, Some("Value2"));
    }

    #[test]
    fn inserting_before_selection_shifts_it_up() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(0)).unwrap();
        combo.insert_item(0, DataEntry { value: Some("Value0") });
        assert_eq!(combo.selected_index(), Some(1));
        assert_eq!(combo.selected_item().unwrap().value, Some("Value1"));
    }

    #[test]
    fn clear_items_clears_selection_once() {
        let mut combo = combo_with_display_member();
        combo.set_selected_index(Some(0)).unwrap();

        let (seen, _sub) = record_events(&combo);
        combo.clear_items();
        combo.clear_items(); // second call has nothing to announce
        assert_eq!(*seen.borrow(), vec![ComboBoxEvent::SelectedIndexChanged]);
        assert!(combo.items().is_empty());
    }

    // ── Text property ───────────────────────────────────────────────

    #[test]
    fn set_text_fires_once_per_change() {
        let mut combo: ComboBox<String> = ComboBox::new();
        let (seen, _sub) = record_events(&combo);

        combo.set_text("abc");
        combo.set_text("abc");
        assert_eq!(*seen.borrow(), vec![ComboBoxEvent::TextChanged]);
        assert_eq!(combo.text(), "abc");
    }

    // ── Search pass-through ─────────────────────────────────────────

    #[test]
    fn find_string_uses_display_member() {
        let combo = combo_with_display_member();
        assert_eq!(combo.find_string(Some("value")), Ok(Some(0)));
        assert_eq!(combo.find_string_from(Some("value"), Some(0)), Ok(Some(1)));
        assert_eq!(combo.find_string_from(Some("value"), Some(1)), Ok(Some(0)));
    }

    #[test]
    fn find_string_exact_defaults_to_ignore_case() {
        let combo = combo_with_display_member();
        assert_eq!(combo.find_string_exact(Some("VALUE1")), Ok(Some(0)));
        assert_eq!(
            combo.find_string_exact_from(Some("VALUE1"), None, false),
            Ok(None)
        );
    }

    #[test]
    fn find_string_bad_cursor_surfaces_error() {
        let combo = combo_with_display_member();
        assert!(combo.find_string_from(Some("value"), Some(2)).is_err());
    }

    // ── Ctrl+Backspace ──────────────────────────────────────────────

    #[test]
    fn ctrl_backspace_on_empty_text_stays_empty() {
        let mut combo = combo_for_ctrl_backspace("", 0);
        assert!(combo.handle_key(ctrl_backspace()));
        assert_eq!(combo.text(), "");
    }

    #[test]
    fn ctrl_backspace_deletes_word_before_caret() {
        let mut combo = combo_for_ctrl_backspace("aaa bbb", 0);
        combo.handle_key(ctrl_backspace());
        assert_eq!(combo.text(), "aaa ");
    }

    #[test]
    fn ctrl_backspace_with_caret_before_end() {
        // Caret sits between "bbb" and "ccc" (4 back from the end).
        let mut combo = combo_for_ctrl_backspace("aaa bbb ccc", -4);
        combo.handle_key(ctrl_backspace());
        assert_eq!(combo.text(), "aaa  ccc");
    }

    #[test]
    fn ctrl_backspace_repeated_drains_delimited_text() {
        let mut combo = combo_for_ctrl_backspace("123-5-7-9", 0);
        for expected in ["123-5-7-", "123-5-", "123-", ""] {
            combo.handle_key(ctrl_backspace());
            assert_eq!(combo.text(), expected);
        }
    }

    #[test]
    fn ctrl_backspace_deletes_active_selection() {
        let mut combo = combo_for_ctrl_backspace("123-5-7-9", 0);
        combo.select(2, 5);
        combo.handle_key(ctrl_backspace());
        assert_eq!(combo.text(), "12-9");
        assert_eq!(combo.selection(), Selection::caret(2));
    }

    #[test]
    fn ctrl_backspace_fires_text_changed_only_on_change() {
        let mut combo = combo_for_ctrl_backspace("word", 0);
        let (seen, _sub) = record_events(&combo);

        assert!(combo.handle_key(ctrl_backspace()));
        assert!(combo.handle_key(ctrl_backspace())); // nothing left to delete
        assert_eq!(*seen.borrow(), vec![ComboBoxEvent::TextChanged]);
    }

    #[test]
    fn unrelated_keys_are_not_handled() {
        let mut combo = combo_for_ctrl_backspace("word", 0);
        assert!(!combo.handle_key(KeyEvent::new(KeyCode::Backspace)));
        assert!(!combo.handle_key(KeyEvent::ctrl(KeyCode::Char('w'))));
        assert_eq!(combo.text(), "word");
    }
}
