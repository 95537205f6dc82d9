use std::ops::Range;

use crate::store::ListEntry;

/// Ordered, cursor-addressed collection backing the check screen.
///
/// The highlighted index is always within `[0, len - 1]`, or 0 when empty.
#[derive(Debug, Clone)]
pub struct ItemList<T> {
    items: Vec<T>,
    index: usize,
}

/// Which slice of the list fits a viewport, and where it sits among pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub visible: Range<usize>,
    pub page: usize,
    pub pages: usize,
}

impl<T: ListEntry> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        ItemList { items, index: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Insert at `index` (clamped to the end).
    pub fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the item at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, item: T) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Swap in a whole new collection, keeping the cursor as close to where
    /// it was as the new length allows.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.select(self.index);
    }

    /// Move the cursor to `index`, clamped to the last item.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.items.len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.select(self.index + 1);
    }

    /// Jump one page of `rows` back, keeping the cursor's row within the page.
    pub fn page_up(&mut self, rows: usize) {
        self.index = self.index.saturating_sub(rows.max(1));
    }

    /// Jump one page of `rows` forward, stopping on the last item.
    pub fn page_down(&mut self, rows: usize) {
        self.select(self.index.saturating_add(rows.max(1)));
    }

    pub fn select_first(&mut self) {
        self.index = 0;
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }

    /// Page containing the cursor for a viewport of `rows` lines.
    pub fn page_layout(&self, rows: usize) -> PageLayout {
        let per_page = rows.max(1);
        let pages = self.items.len().div_ceil(per_page).max(1);
        let page = self.index / per_page;
        let start = page * per_page;
        let end = (start + per_page).min(self.items.len());
        PageLayout {
            visible: start..end,
            page,
            pages,
        }
    }
}
