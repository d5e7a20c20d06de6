//! Page and key types
//!
//! A `Page` is a passive carrier: the navigation keys the data source handed
//! back plus the items. The pager only ever asks whether a key is present.

use serde::{Deserialize, Serialize};

// ============================================================================
// Page Key
// ============================================================================

/// Cursor pointing at a neighbouring page, or the end of the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKey<K> {
    /// More data in this direction, fetched with this key
    At(K),
    /// No more data in this direction
    #[default]
    End,
}

impl<K> PageKey<K> {
    /// Check if this marks the end of the data source
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Borrow the key, if any
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::At(key) => Some(key),
            Self::End => None,
        }
    }

    /// Take the key, if any
    pub fn into_key(self) -> Option<K> {
        match self {
            Self::At(key) => Some(key),
            Self::End => None,
        }
    }
}

impl<K> From<Option<K>> for PageKey<K> {
    fn from(key: Option<K>) -> Self {
        match key {
            Some(key) => Self::At(key),
            None => Self::End,
        }
    }
}

impl<K> From<PageKey<K>> for Option<K> {
    fn from(key: PageKey<K>) -> Self {
        key.into_key()
    }
}

// ============================================================================
// Page
// ============================================================================

/// One loaded unit of data with its navigation keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<K, V> {
    /// Key of the page before this one
    pub previous: PageKey<K>,
    /// Key of the page after this one
    pub next: PageKey<K>,
    /// Page payload, in data source order
    pub items: Vec<V>,
}

impl<K, V> Page<K, V> {
    /// Create a new page
    ///
    /// Keys accept either a `PageKey` or an `Option`, `None` meaning the end.
    pub fn new(
        previous: impl Into<PageKey<K>>,
        next: impl Into<PageKey<K>>,
        items: Vec<V>,
    ) -> Self {
        Self {
            previous: previous.into(),
            next: next.into(),
            items,
        }
    }

    /// Create a page with no neighbours in either direction
    pub fn single(items: Vec<V>) -> Self {
        Self::new(PageKey::End, PageKey::End, items)
    }

    /// Check if nothing can be loaded before this page
    pub fn is_first(&self) -> bool {
        self.previous.is_end()
    }

    /// Check if nothing can be loaded after this page
    pub fn is_last(&self) -> bool {
        self.next.is_end()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
