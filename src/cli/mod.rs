//! CLI module
//!
//! Command-line interface for paging through line-oriented files.
//!
//! # Commands
//!
//! - `browse` - Page through a text file, preloading around each access
//! - `validate` - Check a pager config file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
