//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, PagerConfig};
use crate::loader::LineLoader;
use crate::pager::Pager;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                file,
                lines_per_page,
                start_line,
                pages,
            } => {
                self.browse(file, *lines_per_page, *start_line, pages)
                    .await
            }
            Commands::Validate => self.validate(),
        }
    }

    /// Load the pager config, falling back to defaults when no file is given
    fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Invalid pager config '{}'", path.display())),
            None => Ok(PagerConfig::default()),
        }
    }

    /// Page through a file, printing one JSON line per accessed page
    async fn browse(
        &self,
        file: &Path,
        lines_per_page: usize,
        start_line: usize,
        pages: &[usize],
    ) -> Result<()> {
        let config = self.load_config()?;
        let loader = LineLoader::open(file, lines_per_page)
            .await
            .with_context(|| format!("Failed to open '{}'", file.display()))?
            .starting_at(start_line);

        info!(
            file = %file.display(),
            lines = loader.line_count(),
            lines_per_page = loader.lines_per_page(),
            "Browsing file"
        );

        let mut pager = Pager::new(config, loader);
        pager.load_initial_pages().await?;
        info!(pages = pager.len(), "Initial pages loaded");

        for &index in pages {
            let items = pager.get(index).await?.items.clone();
            let line = json!({
                "index": index,
                "cursor": pager.last_accessed(),
                "loaded": pager.len(),
                "items": items,
            });
            println!("{line}");
        }

        Ok(())
    }

    /// Validate the config file and print the effective values
    fn validate(&self) -> Result<()> {
        let path = self
            .cli
            .config
            .as_ref()
            .context("Config file not specified (use -C flag)")?;
        let config = load_config(path)
            .with_context(|| format!("Invalid pager config '{}'", path.display()))?;

        println!("{}", serde_json::to_string_pretty(&config)?);
        println!("\nConfig is valid");
        Ok(())
    }
}
