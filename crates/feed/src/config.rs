use std::{num::NonZeroUsize, time::Duration};

/// Settings for the blog list pipeline.
/// list_limit: How many published posts to fetch on mount. (default: 100)
/// page_size: Posts per page; zero falls back to the default. (default: 10)
/// debounce_ms: Quiet period before a search query is applied. (default: 300)
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub list_limit: usize,
    pub page_size: NonZeroUsize,
    pub debounce_ms: u64,
}

impl FeedConfig {
    const DEFAULT_LIST_LIMIT: usize = 100;
    const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
        Some(size) => size,
        None => unreachable!(),
    };
    const DEFAULT_DEBOUNCE_MS: u64 = 300;

    pub fn new(
        list_limit: Option<usize>,
        page_size: Option<usize>,
        debounce_ms: Option<u64>,
    ) -> FeedConfig {
        FeedConfig {
            list_limit: list_limit.unwrap_or(Self::DEFAULT_LIST_LIMIT),
            page_size: page_size
                .and_then(NonZeroUsize::new)
                .unwrap_or(Self::DEFAULT_PAGE_SIZE),
            debounce_ms: debounce_ms.unwrap_or(Self::DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
