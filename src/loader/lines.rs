//! Line-oriented text source
//!
//! Serves a text file as fixed-size pages of lines. Keys are line offsets of
//! page starts, always aligned to `lines_per_page`.

use super::types::PageLoader;
use crate::types::{Page, PageKey};
use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Pages over the lines of a text file
#[derive(Debug, Clone)]
pub struct LineLoader {
    /// File contents, one entry per line
    lines: Arc<Vec<String>>,
    /// Lines per page
    lines_per_page: usize,
    /// Offset of the starting page, served for `load(None)`
    start: usize,
}

impl LineLoader {
    /// Create a loader over in-memory lines
    ///
    /// A `lines_per_page` of zero is treated as one.
    pub fn from_lines(lines: Vec<String>, lines_per_page: usize) -> Self {
        Self {
            lines: Arc::new(lines),
            lines_per_page: lines_per_page.max(1),
            start: 0,
        }
    }

    /// Read a file and create a loader over its lines
    pub async fn open(path: impl AsRef<Path>, lines_per_page: usize) -> io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!(path = %path.display(), lines = lines.len(), "Opened line source");
        Ok(Self::from_lines(lines, lines_per_page))
    }

    /// Start on the page containing `line` instead of the first page
    #[must_use]
    pub fn starting_at(mut self, line: usize) -> Self {
        let last_line = self.lines.len().saturating_sub(1);
        let line = line.min(last_line);
        self.start = line - line % self.lines_per_page;
        self
    }

    /// Total number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines per page
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    fn page_at(&self, start: usize) -> io::Result<Page<usize, String>> {
        let total = self.lines.len();
        if start > total || (start > 0 && start == total) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("line offset {start} is past the end ({total} lines)"),
            ));
        }

        let end = (start + self.lines_per_page).min(total);
        let previous = if start == 0 {
            PageKey::End
        } else {
            PageKey::At(start.saturating_sub(self.lines_per_page))
        };
        let next = if end < total {
            PageKey::At(end)
        } else {
            PageKey::End
        };

        Ok(Page::new(previous, next, self.lines[start..end].to_vec()))
    }
}

#[async_trait]
impl PageLoader<usize, String> for LineLoader {
    type Error = io::Error;

    async fn load(&self, key: Option<usize>) -> io::Result<Page<usize, String>> {
        let start = key.unwrap_or(self.start);
        debug!(start, "Loading lines");
        self.page_at(start)
    }
}
