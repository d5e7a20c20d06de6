//! Loader trait and closure adapter

use crate::types::Page;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Source of pages for a `Pager`
///
/// `load(None)` is called exactly once, for the starting page. Every later
/// call passes a key previously returned as some page's `previous` or `next`.
/// Retries, backoff and timeouts belong in the implementation; the pager
/// propagates whatever error comes back and never calls again for that key
/// on its own.
#[async_trait]
pub trait PageLoader<K, V>: Send + Sync
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Error produced by the data source
    type Error: Send + 'static;

    /// Load the page identified by `key`, or the starting page for `None`
    async fn load(&self, key: Option<K>) -> Result<Page<K, V>, Self::Error>;
}

/// Loader backed by an async closure, see [`from_fn`]
#[derive(Clone)]
pub struct LoaderFn<F> {
    f: F,
}

impl<F> fmt::Debug for LoaderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderFn").finish_non_exhaustive()
    }
}

/// Turn an async closure into a `PageLoader`
///
/// # Examples
///
/// ```ignore
/// let loader = from_fn(|key: Option<i64>| async move {
///     let current = key.unwrap_or(1);
///     Ok::<_, std::io::Error>(Page::new(Some(current - 1), Some(current + 1), vec![current]))
/// });
/// ```
pub fn from_fn<F>(f: F) -> LoaderFn<F> {
    LoaderFn { f }
}

#[async_trait]
impl<K, V, E, F, Fut> PageLoader<K, V> for LoaderFn<F>
where
    F: Fn(Option<K>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<K, V>, E>> + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
    E: Send + 'static,
{
    type Error = E;

    async fn load(&self, key: Option<K>) -> Result<Page<K, V>, E> {
        (self.f)(key).await
    }
}

#[async_trait]
impl<K, V, T> PageLoader<K, V> for Arc<T>
where
    T: PageLoader<K, V> + ?Sized,
    K: Send + 'static,
    V: Send + 'static,
{
    type Error = T::Error;

    async fn load(&self, key: Option<K>) -> Result<Page<K, V>, Self::Error> {
        (**self).load(key).await
    }
}
