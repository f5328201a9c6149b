//! Fuzzy library search for hive.
//!
//! Maintains the summary cache built from the catalog and answers
//! approximate-name lookups against it, falling back to suggestions or a
//! prompt to create a new library when nothing matches well.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod search;
pub mod suggestions;
pub mod summary;

pub use config::Config;
pub use error::{SearchError, SearchResult};
pub use matcher::{DiceMatcher, FuzzyMatcher, MatchResult, Rating};
pub use normalize::resolve_term;
pub use search::{QuickSearch, SearchOutcome};
pub use suggestions::{Presentation, SuggestionFilter, SuggestionPresenter, ThresholdFilter};
pub use summary::{SummaryBuilder, SummaryStore};
