//! Page loader module
//!
//! The pager never talks to a data source directly. It calls a `PageLoader`
//! with an optional key and gets a `Page` (or the loader's error) back.
//!
//! # Overview
//!
//! The loader module provides:
//! - `PageLoader` - Async trait implemented by every data source
//! - `from_fn` - Adapts an async closure into a loader
//! - `LineLoader` - Text file source, one item per line

mod lines;
mod types;

pub use lines::LineLoader;
pub use types::{from_fn, LoaderFn, PageLoader};
