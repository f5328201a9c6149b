//! Resolve what the user typed to a canonical catalog name.

use std::collections::HashMap;

use hive_core::model::NAME_SEPARATOR;
use hive_core::SummaryEntry;

/// Resolve a search term against the summary entries.
///
/// A term without a separator (`foo`) is looked up among the entries'
/// short names; on an exact hit the full canonical name (`alice/foo`) is
/// returned. Qualified terms and terms with no exact hit come back
/// unchanged. When several entries share a short name the first one wins.
pub fn resolve_term(term: &str, entries: &[SummaryEntry]) -> String {
    if term.contains(NAME_SEPARATOR) {
        return term.to_string();
    }

    let mut by_short_name: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(short) = entry.short_name() {
            by_short_name.entry(short).or_insert(entry.name());
        }
    }

    by_short_name
        .get(term)
        .map_or_else(|| term.to_string(), |name| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<SummaryEntry> {
        names
            .iter()
            .map(|name| SummaryEntry::new(*name, "author", "description"))
            .collect()
    }

    #[test]
    fn test_short_name_resolves_to_canonical() {
        let entries = entries(&["alice/foo", "bob/bar"]);
        assert_eq!(resolve_term("foo", &entries), "alice/foo");
        assert_eq!(resolve_term("bar", &entries), "bob/bar");
    }

    #[test]
    fn test_qualified_term_is_unchanged() {
        let entries = entries(&["alice/foo", "bob/bar"]);
        assert_eq!(resolve_term("alice/foo", &entries), "alice/foo");
        assert_eq!(resolve_term("carol/foo", &entries), "carol/foo");
    }

    #[test]
    fn test_unknown_term_is_unchanged() {
        let entries = entries(&["alice/foo", "bob/bar"]);
        assert_eq!(resolve_term("baz", &entries), "baz");
        assert_eq!(resolve_term("fo", &entries), "fo");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let entries = entries(&["alice/foo", "bob/foo"]);
        assert_eq!(resolve_term("foo", &entries), "alice/foo");
    }

    #[test]
    fn test_unqualified_names_have_no_short_name() {
        let entries = entries(&["foo"]);
        assert_eq!(resolve_term("foo", &entries), "foo");
        assert_eq!(resolve_term("x", &[]), "x");
    }
}
