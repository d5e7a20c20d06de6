//! Error types for keypager
//!
//! Two families live here:
//! - `ConfigError` is raised while building a `PagerConfig`, never at call time.
//! - `Error<E>` is returned by pager calls. `E` is the loader's own error type,
//!   carried through untouched.

use thiserror::Error;

/// Errors produced while constructing or parsing a `PagerConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// `initial_load_size` was zero or negative
    #[error("initial_load_size can't be 0 or less")]
    IllegalInitialLoadSize,

    /// `load_size` was zero or negative
    #[error("load_size can't be 0 or less")]
    IllegalLoadSize,

    /// `pre_load_distance` was negative
    #[error("pre_load_distance can't be less than 0")]
    IllegalPreLoadDistance,

    // ============================================================================
    // Parsing Errors
    // ============================================================================
    /// Config text was not valid YAML/JSON
    #[error("Failed to parse pager config: {message}")]
    Parse { message: String },

    /// Config file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Check if this error comes from value validation (as opposed to I/O or syntax)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IllegalInitialLoadSize | Self::IllegalLoadSize | Self::IllegalPreLoadDistance
        )
    }
}

/// Errors returned by `Pager` operations
#[derive(Error, Debug)]
pub enum Error<E = anyhow::Error> {
    /// The loader failed; the value is exactly what the loader returned
    #[error("Page load failed: {0}")]
    Load(E),

    /// Requested index is not (and will not become) a loaded page
    #[error("Page index {index} out of range for {len} loaded pages")]
    IndexOutOfRange { index: usize, len: usize },

    /// Called before `load_initial_pages`
    #[error("Pager is not initialized, call load_initial_pages first")]
    NotInitialized,

    /// `load_initial_pages` called a second time
    #[error("Pager is already initialized")]
    AlreadyInitialized,
}

impl<E> Error<E> {
    /// Create an index out of range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this error was raised by the loader
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is an index error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Borrow the loader's error, if this is one
    pub fn load_error(&self) -> Option<&E> {
        match self {
            Self::Load(e) => Some(e),
            _ => None,
        }
    }

    /// Take the loader's error back out, unchanged
    pub fn into_load_error(self) -> Option<E> {
        match self {
            Self::Load(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for pager operations
pub type Result<T, E = anyhow::Error> = std::result::Result<T, Error<E>>;
