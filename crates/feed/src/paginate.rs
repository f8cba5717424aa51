use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub has_more: bool,
}

/// Fixed-size pages over an in-memory sequence. Page numbers start at 1.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size: page_size.get(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Items `[(page-1)*size, page*size)`. Pages past the end, and page 0,
    /// are empty.
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> Page<'a, T> {
        let end = page.saturating_mul(self.page_size);
        let start = page.saturating_sub(1).saturating_mul(self.page_size);
        Page {
            items: &items[start.min(items.len())..end.min(items.len())],
            number: page,
            has_more: items.len() > end,
        }
    }

    /// Everything up to the end of `page`, for incremental reveal.
    pub fn revealed<'a, T>(&self, items: &'a [T], page: usize) -> Page<'a, T> {
        let end = page.saturating_mul(self.page_size);
        Page {
            items: &items[..end.min(items.len())],
            number: page,
            has_more: items.len() > end,
        }
    }
}
