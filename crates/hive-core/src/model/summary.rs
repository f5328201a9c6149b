use serde::{Deserialize, Serialize};

use crate::model::LibraryDefinition;

/// Separator between the author and library parts of a canonical name.
pub const NAME_SEPARATOR: char = '/';

/// Delimiter joining the fields of a searchable string.
pub const SEARCHABLE_DELIMITER: &str = " | ";

/// The unqualified part of a canonical name: `foo` for `alice/foo`.
///
/// Names without a separator have no short name.
pub fn short_name(name: &str) -> Option<&str> {
    name.split_once(NAME_SEPARATOR).map(|(_, rest)| rest)
}

/// One searchable row of the summary, derived from a [`LibraryDefinition`].
///
/// Fields are read-only so that `searchable` always matches the other three.
/// Entries read back from a cache file get `searchable` rebuilt; the stored
/// value is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEntry")]
pub struct SummaryEntry {
    name: String,
    author: String,
    description: String,
    searchable: String,
}

/// A summary entry as written to the cache file.
#[derive(Deserialize)]
struct StoredEntry {
    name: String,
    author: String,
    description: String,
}

impl From<StoredEntry> for SummaryEntry {
    fn from(stored: StoredEntry) -> Self {
        Self::new(stored.name, stored.author, stored.description)
    }
}

impl SummaryEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let author = author.into();
        let description = description.into();
        let searchable = [name.as_str(), description.as_str(), author.as_str()]
            .join(SEARCHABLE_DELIMITER);
        Self {
            name,
            author,
            description,
            searchable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn searchable(&self) -> &str {
        &self.searchable
    }

    pub fn short_name(&self) -> Option<&str> {
        short_name(&self.name)
    }
}

impl From<&LibraryDefinition> for SummaryEntry {
    fn from(def: &LibraryDefinition) -> Self {
        Self::new(&def.name, &def.author.name, &def.description)
    }
}

/// The flat, cached list of every library in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary(Vec<SummaryEntry>);

impl Summary {
    #[must_use]
    pub fn new(entries: Vec<SummaryEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Searchable strings in summary order, used as match candidates.
    pub fn searchables(&self) -> Vec<&str> {
        self.0.iter().map(SummaryEntry::searchable).collect()
    }
}

impl FromIterator<SummaryEntry> for Summary {
    fn from_iter<I: IntoIterator<Item = SummaryEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a SummaryEntry;
    type IntoIter = std::slice::Iter<'a, SummaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
