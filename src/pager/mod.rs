//! Pager module
//!
//! Keeps an ordered window of loaded pages and grows it around the accessed
//! position.
//!
//! # Overview
//!
//! The pager module provides:
//! - `Pager` - Owns the page window, the access cursor and the preload loop
//! - `SharedPager` - Mutex-guarded handle for using one pager from many tasks

mod window;
mod shared;

pub use window::Pager;
pub use shared::SharedPager;
