//! String similarity scoring.

use serde::Serialize;

/// A candidate string and its similarity to the search target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rating {
    pub candidate: String,
    /// Similarity in `[0.0, 1.0]`.
    pub rating: f64,
}

/// Every candidate rated against a target, plus the best one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    /// Ratings in candidate order.
    pub ratings: Vec<Rating>,
    /// Index into `ratings` of the highest rating; the earliest wins ties.
    pub best_match_index: Option<usize>,
}

impl MatchResult {
    pub fn best_match(&self) -> Option<&Rating> {
        self.best_match_index.and_then(|i| self.ratings.get(i))
    }

    pub fn into_best_match(mut self) -> Option<Rating> {
        let index = self.best_match_index?;
        (index < self.ratings.len()).then(|| self.ratings.swap_remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Scores how similar two strings are.
///
/// Implementations must be deterministic and return values in `[0.0, 1.0]`.
pub trait FuzzyMatcher {
    fn rate(&self, target: &str, candidate: &str) -> f64;

    /// Rate every candidate and pick the best.
    ///
    /// An empty candidate list yields an empty result with no best match.
    fn find_best_match(&self, target: &str, candidates: &[&str]) -> MatchResult {
        let mut best: Option<(usize, f64)> = None;
        let ratings = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let rating = self.rate(target, candidate);
                if best.map_or(true, |(_, top)| rating > top) {
                    best = Some((index, rating));
                }
                Rating {
                    candidate: (*candidate).to_string(),
                    rating,
                }
            })
            .collect();

        MatchResult {
            ratings,
            best_match_index: best.map(|(index, _)| index),
        }
    }
}

/// Sørensen–Dice coefficient over character bigrams, ignoring whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceMatcher;

impl FuzzyMatcher for DiceMatcher {
    fn rate(&self, target: &str, candidate: &str) -> f64 {
        strsim::sorensen_dice(target, candidate)
    }
}
