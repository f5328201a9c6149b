//! Search entry points over the summary cache.

use std::io::Write;

use hive_core::Summary;

use crate::config::Config;
use crate::error::SearchResult;
use crate::matcher::{DiceMatcher, FuzzyMatcher, MatchResult, Rating};
use crate::normalize::resolve_term;
use crate::suggestions::{
    suggest_creation, Presentation, SuggestionFilter, SuggestionPresenter, ThresholdFilter,
};
use crate::summary::SummaryStore;

/// How a suggestion search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Suggestions were printed.
    Presented(Vec<String>),
    /// Nothing worth suggesting; a creation hint for `term` was printed.
    SuggestCreate { term: String },
}

/// Fuzzy lookup of libraries by name.
///
/// Every call loads the summary through the [`SummaryStore`], resolves the
/// term to a canonical name where possible, and rates it against each
/// entry's searchable string.
#[derive(Debug, Clone)]
pub struct QuickSearch<M = DiceMatcher, F = ThresholdFilter> {
    store: SummaryStore,
    matcher: M,
    presenter: SuggestionPresenter<F>,
}

impl QuickSearch {
    /// Search with the default matcher and the configured suggestion policy.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.summary_store(),
            DiceMatcher,
            config.suggestion_filter(),
        )
    }
}

impl<M: FuzzyMatcher, F: SuggestionFilter> QuickSearch<M, F> {
    #[must_use]
    pub fn new(store: SummaryStore, matcher: M, filter: F) -> Self {
        Self {
            store,
            matcher,
            presenter: SuggestionPresenter::new(filter),
        }
    }

    fn match_summary(&self, term: &str, summary: &Summary) -> MatchResult {
        let resolved = resolve_term(term, summary.entries());
        log::debug!("Resolved \"{}\" to \"{}\"", term, resolved);
        self.matcher
            .find_best_match(&resolved, &summary.searchables())
    }

    /// Resolve `term` to a canonical name if it is a known short name.
    pub async fn get_pair_from_input(&self, term: &str) -> SearchResult<String> {
        let summary = self.store.get_summary().await?;
        Ok(resolve_term(term, summary.entries()))
    }

    /// The single best match, or `None` when the catalog is empty.
    pub async fn search(&self, term: &str) -> SearchResult<Option<Rating>> {
        let summary = self.store.get_summary().await?;
        Ok(self.match_summary(term, &summary).into_best_match())
    }

    /// The best match together with every candidate's rating.
    pub async fn search_with_matches(&self, term: &str) -> SearchResult<MatchResult> {
        let summary = self.store.get_summary().await?;
        Ok(self.match_summary(term, &summary))
    }

    /// Print suggestions for `term`, or a hint for creating it when nothing
    /// in the catalog qualifies.
    pub async fn search_with_suggestions<W: Write>(
        &self,
        term: &str,
        out: &mut W,
    ) -> SearchResult<SearchOutcome> {
        let result = self.search_with_matches(term).await?;

        let presentation = if result.is_empty() {
            log::debug!("Catalog is empty, nothing to suggest for \"{}\"", term);
            Presentation::SuggestCreate
        } else {
            self.presenter.present(&result.ratings, out)?
        };

        match presentation {
            Presentation::Presented(suggestions) => Ok(SearchOutcome::Presented(suggestions)),
            Presentation::SuggestCreate => {
                let path = self.store.catalog().definition_path(term);
                suggest_creation(out, term, &path)?;
                Ok(SearchOutcome::SuggestCreate {
                    term: term.to_string(),
                })
            }
        }
    }

    /// Rebuild the summary cache from the catalog.
    pub async fn init_or_update_file(&self) -> SearchResult<Summary> {
        Ok(self.store.init_or_update_file().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_core::Catalog;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_definition(root: &Path, name: &str, author: &str, description: &str) {
        let path = root.join(format!("{name}.json"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let json = serde_json::json!({
            "author": { "name": author },
            "description": description,
        });
        fs::write(path, json.to_string()).unwrap();
    }

    fn search_in(temp_dir: &TempDir) -> QuickSearch {
        let store = SummaryStore::new(
            Catalog::new(temp_dir.path().join("libs")),
            temp_dir.path().join("summary.json"),
        );
        QuickSearch::new(store, DiceMatcher, ThresholdFilter::default())
    }

    #[tokio::test]
    async fn test_get_pair_from_input() {
        let temp_dir = TempDir::new().unwrap();
        let libs = temp_dir.path().join("libs");
        write_definition(&libs, "alice/foo", "Alice", "does foo things");
        write_definition(&libs, "bob/bar", "Bob", "bars");

        let search = search_in(&temp_dir);
        assert_eq!(search.get_pair_from_input("foo").await.unwrap(), "alice/foo");
        assert_eq!(search.get_pair_from_input("bob/bar").await.unwrap(), "bob/bar");
        assert_eq!(search.get_pair_from_input("baz").await.unwrap(), "baz");
    }

    #[tokio::test]
    async fn test_search_prefers_resolved_name() {
        let temp_dir = TempDir::new().unwrap();
        let libs = temp_dir.path().join("libs");
        write_definition(&libs, "alice/foo", "Alice", "does foo things");
        write_definition(&libs, "bob/bar", "Bob", "bars");

        let search = search_in(&temp_dir);
        let best = search.search("bar").await.unwrap().unwrap();
        assert_eq!(best.candidate, "bob/bar | bars | Bob");
    }

    #[tokio::test]
    async fn test_search_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("libs")).unwrap();

        let search = search_in(&temp_dir);
        assert!(search.search("anything").await.unwrap().is_none());
        assert!(search.search_with_matches("anything").await.unwrap().is_empty());

        let mut out = Vec::new();
        let outcome = search
            .search_with_suggestions("anything", &mut out)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::SuggestCreate {
                term: "anything".to_string()
            }
        );
        assert!(String::from_utf8(out).unwrap().contains("No library matches"));
    }

    #[tokio::test]
    async fn test_search_missing_catalog_fails() {
        let temp_dir = TempDir::new().unwrap();

        let search = search_in(&temp_dir);
        assert!(search.search("foo").await.is_err());
        assert!(!temp_dir.path().join("summary.json").exists());
    }
}
