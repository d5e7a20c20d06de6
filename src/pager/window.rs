//! Page window and preload loop

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::loader::PageLoader;
use crate::types::{Page, PageKey};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Side of the window a page is loaded onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Append,
    Prepend,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Prepend => write!(f, "prepend"),
        }
    }
}

/// Incremental pager over a key-cursor data source
///
/// Pages are only ever added, at either end, and never dropped. Index 0 is
/// the earliest page loaded so far, not necessarily the start of the data.
///
/// Every mutator takes `&mut self`, so calls on one instance are serialized
/// by the borrow checker. Use [`SharedPager`](super::SharedPager) to share a
/// pager between tasks.
pub struct Pager<K, V, L> {
    /// Validated configuration
    config: PagerConfig,
    /// Page source
    loader: L,
    /// Loaded window, in data source order
    pages: VecDeque<Page<K, V>>,
    /// Index of the page most recently requested through `get`
    last_accessed: usize,
}

impl<K, V, L> Pager<K, V, L>
where
    K: Clone + Send + 'static,
    V: Send + 'static,
    L: PageLoader<K, V>,
{
    /// Create a pager; no page is loaded until `load_initial_pages`
    pub fn new(config: PagerConfig, loader: L) -> Self {
        Self {
            config,
            loader,
            pages: VecDeque::new(),
            last_accessed: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Configuration this pager runs with
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The page source
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Loaded pages, in data source order
    pub fn pages(&self) -> &VecDeque<Page<K, V>> {
        &self.pages
    }

    /// Number of loaded pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True until the first page has been loaded
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index of the page most recently requested through `get`
    pub fn last_accessed(&self) -> usize {
        self.last_accessed
    }

    /// All loaded items, flattened across pages
    pub fn items(&self) -> impl Iterator<Item = &V> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Check if the last loaded page has no successor
    pub fn is_append_end(&self) -> bool {
        self.pages.back().map_or(true, Page::is_last)
    }

    /// Check if the first loaded page has no predecessor
    pub fn is_prepend_end(&self) -> bool {
        self.pages.front().map_or(true, Page::is_first)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Load the starting page, fill up to `initial_load_size` pages, then
    /// run one preload pass
    ///
    /// Fails with `AlreadyInitialized` once a first page exists. If the very
    /// first load fails, nothing is kept and the call may be retried.
    pub async fn load_initial_pages(&mut self) -> Result<(), L::Error> {
        if !self.pages.is_empty() {
            return Err(Error::AlreadyInitialized);
        }

        debug!(
            initial_load_size = self.config.initial_load_size(),
            "Loading initial pages"
        );
        let first = self.loader.load(None).await.map_err(Error::Load)?;
        self.pages.push_back(first);
        self.last_accessed = 0;

        for _ in 1..self.config.initial_load_size() {
            self.push_back().await?;
        }

        self.preload().await?;
        debug!(pages = self.pages.len(), "Initial pages loaded");
        Ok(())
    }

    /// Load one page after the last loaded page
    ///
    /// Returns `false` without loading once the append end is reached.
    pub async fn append_page(&mut self) -> Result<bool, L::Error> {
        self.ensure_initialized()?;
        self.push_back().await
    }

    /// Load one page before the first loaded page
    ///
    /// Returns `false` without loading once the prepend end is reached. On
    /// success the access cursor shifts by one so it keeps pointing at the
    /// same page.
    pub async fn prepend_page(&mut self) -> Result<bool, L::Error> {
        self.ensure_initialized()?;
        self.push_front().await
    }

    /// Access a page, preloading around it first
    ///
    /// `index` must be a loaded page, or exactly one past the last page while
    /// more data exists (the append preload always brings that page in).
    /// Anything else fails with `IndexOutOfRange` before any load or cursor
    /// change. When a preload load fails the error is returned; pages loaded
    /// before the failure stay, and the cursor only keeps the new index if it
    /// points at a loaded page.
    pub async fn get(&mut self, index: usize) -> Result<&Page<K, V>, L::Error> {
        self.ensure_initialized()?;

        let len = self.pages.len();
        if index > len || (index == len && self.is_append_end()) {
            return Err(Error::out_of_range(index, len));
        }

        let previous = self.last_accessed;
        self.last_accessed = index;

        if let Err(e) = self.preload().await {
            if self.last_accessed >= self.pages.len() {
                self.last_accessed = previous;
            }
            return Err(e);
        }

        if self.last_accessed >= self.pages.len() {
            self.last_accessed = previous;
            return Err(Error::out_of_range(index, self.pages.len()));
        }

        Ok(&self.pages[self.last_accessed])
    }

    /// Read a page without moving the cursor or loading anything
    pub fn peek(&self, index: usize) -> Result<&Page<K, V>, L::Error> {
        self.pages
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.pages.len()))
    }

    // ========================================================================
    // Preloading
    // ========================================================================

    fn in_append_distance(&self) -> bool {
        self.pages.len().saturating_sub(self.last_accessed) <= self.config.pre_load_distance()
    }

    fn in_prepend_distance(&self) -> bool {
        self.last_accessed < self.config.pre_load_distance()
    }

    /// Grow the window in `load_size` batches until the cursor is far enough
    /// from both ends, or the ends are reached. Appending always finishes
    /// before prepending starts.
    async fn preload(&mut self) -> Result<(), L::Error> {
        while !self.is_append_end() && self.in_append_distance() {
            trace!(
                pages = self.pages.len(),
                cursor = self.last_accessed,
                batch = self.config.load_size(),
                "Append preload triggered"
            );
            for _ in 0..self.config.load_size() {
                self.push_back().await?;
            }
        }

        while !self.is_prepend_end() && self.in_prepend_distance() {
            trace!(
                pages = self.pages.len(),
                cursor = self.last_accessed,
                batch = self.config.load_size(),
                "Prepend preload triggered"
            );
            for _ in 0..self.config.load_size() {
                self.push_front().await?;
            }
        }

        Ok(())
    }

    async fn push_back(&mut self) -> Result<bool, L::Error> {
        let Some(PageKey::At(key)) = self.pages.back().map(|page| page.next.clone()) else {
            return Ok(false);
        };

        let page = fetch(&self.loader, key, Direction::Append, self.pages.len()).await?;
        self.pages.push_back(page);
        Ok(true)
    }

    async fn push_front(&mut self) -> Result<bool, L::Error> {
        let Some(PageKey::At(key)) = self.pages.front().map(|page| page.previous.clone()) else {
            return Ok(false);
        };

        let page = fetch(&self.loader, key, Direction::Prepend, self.pages.len()).await?;
        self.pages.push_front(page);
        self.last_accessed += 1;
        Ok(true)
    }

    fn ensure_initialized(&self) -> Result<(), L::Error> {
        if self.pages.is_empty() {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }
}

/// Load one neighbouring page; only the loader is borrowed across the await
async fn fetch<K, V, L>(
    loader: &L,
    key: K,
    direction: Direction,
    loaded: usize,
) -> Result<Page<K, V>, L::Error>
where
    K: Send + 'static,
    V: Send + 'static,
    L: PageLoader<K, V>,
{
    debug!(%direction, loaded, "Loading page");
    loader.load(Some(key)).await.map_err(Error::Load)
}

impl<K, V, L> fmt::Debug for Pager<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("config", &self.config)
            .field("pages", &self.pages.len())
            .field("last_accessed", &self.last_accessed)
            .finish_non_exhaustive()
    }
}
