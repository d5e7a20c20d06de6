//! Shared pager handle
//!
//! Serializes calls from several tasks onto one `Pager` through a tokio
//! mutex. The lock is held for the whole call, loads included, so no two
//! operations ever interleave on the same window.

use super::window::Pager;
use crate::error::Result;
use crate::loader::PageLoader;
use crate::types::Page;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Cloneable, mutex-guarded handle to a `Pager`
pub struct SharedPager<K, V, L> {
    inner: Arc<Mutex<Pager<K, V, L>>>,
}

impl<K, V, L> Clone for SharedPager<K, V, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, L> fmt::Debug for SharedPager<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPager")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl<K, V, L> SharedPager<K, V, L>
where
    K: Clone + Send + 'static,
    V: Clone + Send + 'static,
    L: PageLoader<K, V>,
{
    /// Wrap a pager for shared use
    pub fn new(pager: Pager<K, V, L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pager)),
        }
    }

    /// See [`Pager::load_initial_pages`]
    pub async fn load_initial_pages(&self) -> Result<(), L::Error> {
        self.inner.lock().await.load_initial_pages().await
    }

    /// See [`Pager::append_page`]
    pub async fn append_page(&self) -> Result<bool, L::Error> {
        self.inner.lock().await.append_page().await
    }

    /// See [`Pager::prepend_page`]
    pub async fn prepend_page(&self) -> Result<bool, L::Error> {
        self.inner.lock().await.prepend_page().await
    }

    /// See [`Pager::get`]; returns a copy of the page
    pub async fn get(&self, index: usize) -> Result<Page<K, V>, L::Error> {
        let mut pager = self.inner.lock().await;
        let page = pager.get(index).await?.clone();
        Ok(page)
    }

    /// See [`Pager::peek`]; returns a copy of the page
    pub async fn peek(&self, index: usize) -> Result<Page<K, V>, L::Error> {
        let pager = self.inner.lock().await;
        let page = pager.peek(index)?.clone();
        Ok(page)
    }

    /// Number of loaded pages
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Index of the page most recently requested through `get`
    pub async fn last_accessed(&self) -> usize {
        self.inner.lock().await.last_accessed()
    }

    /// Lock the pager for a sequence of calls
    pub async fn lock(&self) -> MutexGuard<'_, Pager<K, V, L>> {
        self.inner.lock().await
    }

    /// Take the pager back if this is the last handle
    pub fn try_unwrap(self) -> std::result::Result<Pager<K, V, L>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
