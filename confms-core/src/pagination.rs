use crate::error::PortalError;

/// Page size used by every list screen unless configured otherwise
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Generic pagination state for an in-memory list.
///
/// Pages are 1-based. Total pages and the visible slice are derived from the
/// list on every call and never stored. Every mutation re-checks the current
/// page, so a list that shrinks under an advanced page moves the view back to
/// page 1 immediately instead of leaving it on an empty page.
#[derive(Debug, Clone)]
pub struct PaginatedView<T> {
    items: Vec<T>,
    current_page: usize,
    items_per_page: usize,
}

/// Snapshot of one page, handed to list views and the pagination control
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub start_index: usize,
    /// May exceed `total_items` on the last page
    pub end_index: usize,
    pub items: &'a [T],
}

impl<T> PaginatedView<T> {
    pub fn new(items: Vec<T>, items_per_page: usize) -> Result<Self, PortalError> {
        if items_per_page == 0 {
            return Err(PortalError::InvalidPageSize(items_per_page));
        }

        Ok(Self {
            items,
            current_page: 1,
            items_per_page,
        })
    }

    pub fn with_default_page_size(items: Vec<T>) -> Self {
        Self {
            items,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Zero when the list is empty
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page)
    }

    pub fn start_index(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
    }

    pub fn end_index(&self) -> usize {
        self.start_index().saturating_add(self.items_per_page)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn current_page_items(&self) -> &[T] {
        let len = self.items.len();
        let start = self.start_index().min(len);
        let end = self.end_index().min(len);
        &self.items[start..end]
    }

    pub fn page(&self) -> PageSlice<'_, T> {
        PageSlice {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.items.len(),
            items_per_page: self.items_per_page,
            start_index: self.start_index(),
            end_index: self.end_index(),
            items: self.current_page_items(),
        }
    }

    /// Jump to `page`; out-of-range targets land on page 1
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.correct_page();
    }

    pub fn first_page(&mut self) {
        self.set_current_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_current_page(self.total_pages().max(1));
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.can_go_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Replace the whole list, e.g. after a refetch or a new filter
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.correct_page();
    }

    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
        self.correct_page();
    }

    /// Remove by absolute index into the full list
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.correct_page();
        Some(removed)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    // An empty list keeps its stale page: there is nothing to render either way.
    fn correct_page(&mut self) {
        let total_pages = self.total_pages();
        if total_pages > 0 && !(1..=total_pages).contains(&self.current_page) {
            log::debug!(
                "Page {} out of range for {} pages, resetting to page 1",
                self.current_page,
                total_pages
            );
            self.current_page = 1;
        }
    }
}
