//! # keypager
//!
//! An incremental pager for data sources that paginate with opaque cursor
//! keys instead of numeric offsets.
//!
//! ## Features
//!
//! - **Key-Cursor Paging**: Follows the previous/next keys each page returns
//! - **Bidirectional Preloading**: Fetches ahead of and behind the accessed page
//! - **Batched Loads**: Grows the window `load_size` pages at a time, one load in flight
//! - **Pluggable Sources**: Any async closure or `PageLoader` implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keypager::{from_fn, Page, Pager, PagerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PagerConfig::new(2, 3, 1)?;
//!     let loader = from_fn(|key: Option<i64>| async move {
//!         let current = key.unwrap_or(1);
//!         Ok::<_, std::io::Error>(Page::new(Some(current - 1), Some(current + 1), vec![current]))
//!     });
//!
//!     let mut pager = Pager::new(config, loader);
//!     pager.load_initial_pages().await?;
//!
//!     let page = pager.get(1).await?;
//!     println!("{:?}", page.items);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                            Pager                              │
//! │  load_initial_pages()  get(i)  peek(i)  append / prepend      │
//! └───────────────────────────────────────────────────────────────┘
//!                                │ load(key)
//! ┌──────────────┬───────────────┴───────────┬────────────────────┐
//! │  PagerConfig │         PageLoader        │       Page         │
//! ├──────────────┼───────────────────────────┼────────────────────┤
//! │ initial size │ from_fn(async closure)    │ previous: PageKey  │
//! │ load size    │ LineLoader (text files)   │ next: PageKey      │
//! │ distance     │ your own source           │ items: Vec<V>      │
//! └──────────────┴───────────────────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // error struct fields and CLI args

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page and key types
pub mod types;

/// Pager configuration
pub mod config;

/// Page loaders
pub mod loader;

/// Page window and preloading
pub mod pager;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, PagerConfig, PagerConfigBuilder};
pub use error::{ConfigError, Error, Result};
pub use loader::{from_fn, LineLoader, LoaderFn, PageLoader};
pub use pager::{Pager, SharedPager};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
