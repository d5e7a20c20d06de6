//! Integration tests for the public pager API
//!
//! Drives `Pager` end to end against file-backed and cursor-token sources.

use async_trait::async_trait;
use keypager::{
    load_config_from_str, ConfigError, Error, LineLoader, Page, PageKey, PageLoader, Pager,
    PagerConfig, SharedPager,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Cursor-token source
// ============================================================================

#[derive(Debug, thiserror::Error)]
enum FeedError {
    #[error("unknown cursor: {0}")]
    UnknownCursor(String),
}

/// Simulated API feed: pages are addressed by opaque string tokens
struct TokenFeed {
    pages: HashMap<String, Page<String, u32>>,
    start: String,
    requests: AtomicUsize,
}

impl TokenFeed {
    /// `count` pages of `per_page` items; page `n` has token `tok-n`
    fn new(count: u32, per_page: u32, start: u32) -> Self {
        let token = |n: u32| format!("tok-{n}");
        let pages = (0..count)
            .map(|n| {
                let previous = (n > 0).then(|| token(n - 1));
                let next = (n + 1 < count).then(|| token(n + 1));
                let items = (n * per_page..(n + 1) * per_page).collect();
                (token(n), Page::new(previous, next, items))
            })
            .collect();

        Self {
            pages,
            start: token(start),
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageLoader<String, u32> for TokenFeed {
    type Error = FeedError;

    async fn load(&self, key: Option<String>) -> Result<Page<String, u32>, FeedError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1)).await;

        let token = key.unwrap_or_else(|| self.start.clone());
        self.pages
            .get(&token)
            .cloned()
            .ok_or(FeedError::UnknownCursor(token))
    }
}

// ============================================================================
// Token Feed Tests
// ============================================================================

#[tokio::test]
async fn test_scroll_forward_through_feed() {
    let feed = Arc::new(TokenFeed::new(10, 3, 0));
    let config = PagerConfig::new(2, 2, 1).unwrap();
    let mut pager = Pager::new(config, Arc::clone(&feed));

    pager.load_initial_pages().await.unwrap();
    assert_eq!(pager.len(), 2);

    let mut index = 0;
    while index < pager.len() {
        let page = pager.get(index).await.unwrap();
        assert_eq!(page.items[0], index as u32 * 3);
        index += 1;
    }

    assert_eq!(pager.len(), 10);
    assert!(pager.is_append_end());
    assert_eq!(feed.requests(), 10);
    assert_eq!(pager.items().count(), 30);
}

#[tokio::test]
async fn test_start_mid_feed_and_scroll_back() {
    let feed = Arc::new(TokenFeed::new(8, 2, 5));
    let config = PagerConfig::new(1, 1, 1).unwrap();
    let mut pager = Pager::new(config, Arc::clone(&feed));

    pager.load_initial_pages().await.unwrap();
    assert_eq!(pager.peek(0).unwrap().items, vec![8, 9]);
    assert_eq!(pager.last_accessed(), 1);

    // Keep requesting the first loaded page until the feed start is reached
    while !pager.is_prepend_end() {
        pager.get(0).await.unwrap();
    }

    let first = pager.peek(0).unwrap();
    assert_eq!(first.items, vec![0, 1]);
    assert_eq!(first.previous, PageKey::End);
    assert_eq!(pager.len(), 7);
}

#[tokio::test]
async fn test_feed_error_is_returned_unchanged() {
    let feed = TokenFeed::new(3, 1, 0);
    let broken = Arc::new(TokenFeed {
        start: "missing".to_string(),
        ..feed
    });
    let mut pager = Pager::new(PagerConfig::default(), Arc::clone(&broken));

    let err = pager.load_initial_pages().await.unwrap_err();

    match err {
        Error::Load(FeedError::UnknownCursor(token)) => assert_eq!(token, "missing"),
        other => panic!("Expected load error, got {other:?}"),
    }
    assert!(pager.is_empty());
}

#[tokio::test]
async fn test_shared_pager_across_tasks() {
    let feed = Arc::new(TokenFeed::new(20, 1, 0));
    let config = PagerConfig::new(2, 1, 1).unwrap();
    let shared = SharedPager::new(Pager::new(config, Arc::clone(&feed)));
    shared.load_initial_pages().await.unwrap();

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let pager = shared.clone();
            tokio::spawn(async move {
                for index in 0..5 {
                    pager.get(index).await.unwrap();
                }
            })
        })
        .collect();
    for result in futures::future::join_all(readers).await {
        result.unwrap();
    }

    // get(4) on a 5-page window triggers exactly one more append
    assert_eq!(shared.len().await, 6);
    assert_eq!(feed.requests(), 6);
}

// ============================================================================
// File Source Tests
// ============================================================================

#[tokio::test]
async fn test_line_file_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let content: String = (0..25).map(|i| format!("entry {i}\n")).collect();
    std::fs::write(&path, content).unwrap();

    let config = load_config_from_str("initial_load_size: 2\nload_size: 2\npre_load_distance: 1\n")
        .unwrap();
    let loader = LineLoader::open(&path, 4).await.unwrap().starting_at(12);
    let mut pager = Pager::new(config, loader);

    pager.load_initial_pages().await.unwrap();
    // pages starting at lines 12 and 16, then two pages prepended
    assert_eq!(pager.len(), 4);
    assert_eq!(pager.peek(0).unwrap().items[0], "entry 4");
    assert_eq!(pager.last_accessed(), 2);

    let page = pager.get(3).await.unwrap();
    assert_eq!(page.items, vec!["entry 16", "entry 17", "entry 18", "entry 19"]);

    // lines 20..24, then line 24 alone: the append end
    assert_eq!(pager.len(), 6);
    assert!(pager.is_append_end());
    assert_eq!(pager.peek(5).unwrap().items, vec!["entry 24"]);
}

#[test]
fn test_illegal_config_file_values() {
    let err = load_config_from_str("initial_load_size: 1\nload_size: 0\npre_load_distance: -1\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::IllegalLoadSize));
}
