//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Key-cursor pager CLI
#[derive(Parser, Debug)]
#[command(name = "keypager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Page through a text file, one item per line
    Browse {
        /// File to read
        file: PathBuf,

        /// Lines per page
        #[arg(short, long, default_value = "20")]
        lines_per_page: usize,

        /// Line to start on (its page is loaded first)
        #[arg(long, default_value = "0")]
        start_line: usize,

        /// Page indices to access, in order (comma-separated)
        #[arg(short, long, value_delimiter = ',', default_value = "0")]
        pages: Vec<usize>,
    },

    /// Validate the pager configuration and print it
    Validate,
}
