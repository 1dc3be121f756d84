//! Wrapped prefix and exact search over an [`ItemList`].
//!
//! Both searches scan the list circularly: the probe starts one past the
//! start cursor, walks forward, wraps past the end back to index 0, and
//! visits each index at most once. `start == None` means "search from the
//! beginning".
//!
//! Prefix search ([`ItemList::find_string`]) is unconditionally
//! case-insensitive. Exact search ([`ItemList::find_string_exact`]) honors
//! an `ignore_case` flag.
//!
//! # Invariants
//!
//! 1. Searching never mutates the list or reorders items.
//! 2. At most `len` items are probed per call.
//! 3. An item without a display string never matches any query.
//! 4. A `None` query never matches anything, including `None` display
//!    strings.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Outcome |
//! |---------|-------|---------|
//! | Start cursor past the end | `start >= len` on a non-empty list | [`StartIndexError`] |
//! | Empty list | any query, any start | `Ok(None)` (early out, no validation) |
//! | No match after a full wrap | query absent from the list | `Ok(None)` |

use std::fmt;

use crate::list::ItemList;

/// The start cursor of a search was outside the item list.
///
/// Only raised for non-empty lists: an empty list short-circuits to
/// "no match" before the cursor is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartIndexError {
    /// The offending cursor value.
    pub start_index: usize,
    /// Item count at the time of the call.
    pub len: usize,
}

impl fmt::Display for StartIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start_index {} out of range for a list of {} items (valid: 0..={})",
            self.start_index,
            self.len,
            self.len.saturating_sub(1)
        )
    }
}

impl std::error::Error for StartIndexError {}

impl<T> ItemList<T> {
    /// Find the next item whose display string starts with `query`,
    /// wrapping circularly from one past `start`.
    ///
    /// The comparison is case-insensitive regardless of the query's case.
    /// A `None` query matches nothing; an empty query matches every item
    /// that has a display string.
    ///
    /// Returns `Ok(None)` when no item matches, or when the list is empty
    /// (for any `start`).
    ///
    /// # Errors
    ///
    /// [`StartIndexError`] when `start` is `Some(i)` with `i >= len` on a
    /// non-empty list.
    pub fn find_string(
        &self,
        query: Option<&str>,
        start: Option<usize>,
    ) -> Result<Option<usize>, StartIndexError> {
        // A missing query short-circuits before cursor validation.
        let Some(query) = query else {
            tracing::trace!(?start, "prefix search without a query");
            return Ok(None);
        };
        let needle = query.to_lowercase();
        let found = self.scan_from(start, |text| text.to_lowercase().starts_with(&needle))?;
        tracing::trace!(query, ?start, ?found, "prefix search");
        Ok(found)
    }

    /// Find the next item whose display string equals `query`, wrapping
    /// circularly from one past `start`.
    ///
    /// With `ignore_case` the comparison is case-insensitive; otherwise it
    /// is an ordinal equality check. An empty query matches exactly the
    /// items whose display string is empty; a `None` query matches nothing,
    /// not even items without a display string.
    ///
    /// # Errors
    ///
    /// [`StartIndexError`] when `start` is `Some(i)` with `i >= len` on a
    /// non-empty list.
    pub fn find_string_exact(
        &self,
        query: Option<&str>,
        start: Option<usize>,
        ignore_case: bool,
    ) -> Result<Option<usize>, StartIndexError> {
        let Some(query) = query else {
            tracing::trace!(?start, "exact search without a query");
            return Ok(None);
        };
        let found = if ignore_case {
            let needle = query.to_lowercase();
            self.scan_from(start, |text| text.to_lowercase() == needle)?
        } else {
            self.scan_from(start, |text| text == query)?
        };
        tracing::trace!(query, ?start, ignore_case, ?found, "exact search");
        Ok(found)
    }

    /// Probe indexes in wrapped order, returning the first whose display
    /// string satisfies `matches`.
    fn scan_from(
        &self,
        start: Option<usize>,
        matches: impl Fn(&str) -> bool,
    ) -> Result<Option<usize>, StartIndexError> {
        let len = self.len();
        if len == 0 {
            return Ok(None);
        }
        self.validate_start(start)?;

        let first = match start {
            None => 0,
            Some(s) => (s + 1) % len,
        };
        let mut index = first;
        for _ in 0..len {
            if let Some(text) = self.display_text(index)
                && matches(&text)
            {
                return Ok(Some(index));
            }
            index = (index + 1) % len;
        }
        Ok(None)
    }

    fn validate_start(&self, start: Option<usize>) -> Result<(), StartIndexError> {
        match start {
            Some(s) if s >= self.len() => Err(StartIndexError {
                start_index: s,
                len: self.len(),
            }),
            _ => Ok(()),
        }
    }
}
