//! # Incremental Reveal
//!
//! "Load More" over a list that is already fully fetched. The cursor only
//! counts how many leading items are visible; the items themselves are
//! passed in on every call.
//!
//! ```text
//!            advance()
//!   ┌─────────┐ ──────► ┌──────────┐
//!   │ Partial │         │ Complete │  (terminal until reinitialize)
//!   └─────────┘ ◄─┐     └──────────┘
//!        │        │
//!        └────────┘ advance() while revealed < len
//! ```
//!
//! The cursor does not know which collection it belongs to. When the
//! collection is swapped for a different one (another restaurant's reviews),
//! the owner must call `reinitialize()`. A refetch of the same collection
//! keeps the current position.

/// Number of reviews revealed per "Load More".
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// More items exist past the visible prefix.
    Partial,
    /// Everything is visible.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCursor {
    page_size: usize,
    revealed: usize,
}

impl Default for RevealCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl RevealCursor {
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            revealed: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// The leading `min(revealed, len)` items.
    pub fn visible_prefix<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.revealed.min(items.len())]
    }

    /// True once every item is visible. An empty list is always complete.
    pub fn is_complete<T>(&self, items: &[T]) -> bool {
        self.revealed >= items.len()
    }

    pub fn state<T>(&self, items: &[T]) -> RevealState {
        if self.is_complete(items) {
            RevealState::Complete
        } else {
            RevealState::Partial
        }
    }

    /// Items still hidden behind "Load More".
    pub fn remaining<T>(&self, items: &[T]) -> usize {
        items.len().saturating_sub(self.revealed)
    }

    /// Reveals one more page. Past the end this only grows the count; the
    /// visible prefix stays clamped to the list length.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            revealed: self.revealed.saturating_add(self.page_size),
            ..self
        }
    }

    /// A fresh cursor with the same page size.
    #[must_use]
    pub fn reinitialize(self) -> Self {
        Self::new(self.page_size)
    }
}
