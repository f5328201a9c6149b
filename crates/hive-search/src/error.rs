//! Search error types.

use thiserror::Error;

/// Errors that can occur while loading the summary or presenting results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Scanning the catalog, reading a definition, or reading/writing the
    /// summary file failed.
    #[error(transparent)]
    Catalog(#[from] hive_core::Error),

    /// Writing results to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias for search results.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
