//! Page arithmetic over ordered entry lists
//!
//! A page size of zero is treated as one so the arithmetic never divides by zero.

/// Default number of entries shown per page
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Number of pages needed for `count` items; at least one, even when empty
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Items on page `page_index` (zero-based), clamped to what is available
pub fn page_slice<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page position within a list whose length may change between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
    page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        PageCursor {
            index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based page index
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jump to `index`, clamped to the last page for `count` items
    pub fn seek(&mut self, index: usize, count: usize) {
        self.index = index;
        self.clamp(count);
    }

    /// Advance one page, stopping at the last page
    pub fn next(&mut self, count: usize) {
        let last = total_pages(count, self.page_size) - 1;
        self.index = (self.index + 1).min(last);
    }

    /// Go back one page, stopping at the first page
    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Re-clamp after the item count changed (e.g. after a delete)
    pub fn clamp(&mut self, count: usize) {
        let last = total_pages(count, self.page_size) - 1;
        self.index = self.index.min(last);
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.index, self.page_size)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor::new(DEFAULT_PAGE_SIZE)
    }
}
