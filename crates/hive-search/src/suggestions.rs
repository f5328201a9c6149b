//! Turning ratings into user-facing suggestions.

use std::io::{self, Write};
use std::path::Path;

use crate::matcher::Rating;

/// Header printed above a list of suggestions.
pub const SUGGESTIONS_HEADER: &str = "Look at what I found";

/// Decides which rated candidates are good enough to show, and in what order.
pub trait SuggestionFilter {
    fn filter_qualifying(&self, ratings: &[Rating]) -> Vec<String>;
}

/// Keeps candidates rated strictly above a threshold, best first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdFilter {
    threshold: f64,
    limit: usize,
}

impl ThresholdFilter {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            limit: 0,
        }
    }

    /// Show at most `limit` suggestions; 0 means no limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for ThresholdFilter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SuggestionFilter for ThresholdFilter {
    fn filter_qualifying(&self, ratings: &[Rating]) -> Vec<String> {
        let mut qualifying: Vec<&Rating> = ratings
            .iter()
            .filter(|r| r.rating > self.threshold)
            .collect();

        // Stable, so equal ratings keep candidate order.
        qualifying.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        if self.limit > 0 {
            qualifying.truncate(self.limit);
        }

        qualifying.into_iter().map(|r| r.candidate.clone()).collect()
    }
}

/// What the presenter did with a set of ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// These suggestions were written out.
    Presented(Vec<String>),
    /// Nothing qualified; the caller should offer to create a new library.
    SuggestCreate,
}

/// Writes qualifying suggestions to an output stream.
#[derive(Debug, Clone, Default)]
pub struct SuggestionPresenter<F> {
    filter: F,
}

impl<F: SuggestionFilter> SuggestionPresenter<F> {
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Print the qualifying suggestions under a header.
    ///
    /// Writes nothing and returns [`Presentation::SuggestCreate`] when no
    /// rating qualifies.
    pub fn present<W: Write>(&self, ratings: &[Rating], out: &mut W) -> io::Result<Presentation> {
        let suggestions = self.filter.filter_qualifying(ratings);
        if suggestions.is_empty() {
            return Ok(Presentation::SuggestCreate);
        }

        writeln!(out, "{SUGGESTIONS_HEADER}")?;
        for suggestion in &suggestions {
            writeln!(out, "{suggestion}")?;
        }

        Ok(Presentation::Presented(suggestions))
    }
}

/// Tell the user nothing matched and where a new definition would go.
pub fn suggest_creation<W: Write>(out: &mut W, term: &str, definition_path: &Path) -> io::Result<()> {
    writeln!(out, "No library matches \"{term}\".")?;
    writeln!(out, "To add it, create {}", definition_path.display())?;
    writeln!(
        out,
        "with at least {{\"author\": {{\"name\": ...}}, \"description\": ...}} and run 'hive rebuild'."
    )
}
