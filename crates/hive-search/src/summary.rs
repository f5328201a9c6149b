//! The summary cache: a flat JSON list of every library in the catalog.

use std::io;
use std::path::{Path, PathBuf};

use hive_core::{Catalog, Error, Result, Summary, SummaryEntry};

/// Builds a [`Summary`] by reading every definition in the catalog.
#[derive(Debug, Clone)]
pub struct SummaryBuilder {
    catalog: Catalog,
    exclude: Option<PathBuf>,
}

impl SummaryBuilder {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            exclude: None,
        }
    }

    /// Skip `path` when scanning, e.g. a summary file kept inside the catalog.
    #[must_use]
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scan the catalog and load every definition into a summary.
    ///
    /// Entries follow the scan order. A single unreadable or invalid
    /// definition fails the whole build.
    pub async fn build(&self) -> Result<Summary> {
        let paths = self.catalog.list_definition_paths().await?;
        let mut entries = Vec::with_capacity(paths.len());

        for path in &paths {
            if self.is_excluded(path).await {
                log::debug!("Skipping excluded file: {}", path.display());
                continue;
            }

            let name = self.definition_name(path)?;
            let definition = self.catalog.load_definition(&name).await?;
            entries.push(SummaryEntry::from(&definition));
        }

        log::info!(
            "Built summary of {} libraries from {}",
            entries.len(),
            self.catalog.dir().display()
        );
        Ok(Summary::new(entries))
    }

    fn definition_name(&self, path: &Path) -> Result<String> {
        self.catalog.canonical_name(path).ok_or_else(|| {
            Error::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "definition is outside the catalog"),
            )
        })
    }

    async fn is_excluded(&self, path: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };
        if path == exclude.as_path() {
            return true;
        }
        if path.file_name() != exclude.file_name() {
            return false;
        }
        match (
            tokio::fs::canonicalize(path).await,
            tokio::fs::canonicalize(exclude).await,
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Replace `path` with the summary as pretty-printed JSON.
    ///
    /// The JSON goes to a sibling `.tmp` file first and is renamed over
    /// `path`, so an interrupted write never leaves a truncated cache.
    pub async fn persist(summary: &Summary, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| Error::io(path, io::Error::from(e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        let tmp_path = temp_path(path);
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| Error::io(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|e| Error::io(path, e))?;

        log::info!("Wrote {} summary entries to {}", summary.len(), path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Read access to the summary cache, building it on first use.
///
/// An existing cache file is always trusted, even when definitions have
/// changed since it was written. Use [`SummaryStore::init_or_update_file`]
/// to refresh it.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    builder: SummaryBuilder,
    path: PathBuf,
}

impl SummaryStore {
    #[must_use]
    pub fn new(catalog: Catalog, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            builder: SummaryBuilder::new(catalog).excluding(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        self.builder.catalog()
    }

    /// Return the cached summary, building and persisting it if absent.
    pub async fn get_summary(&self) -> Result<Summary> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;

        if exists {
            log::debug!("Reading summary cache {}", self.path.display());
            self.read().await
        } else {
            log::debug!("No summary cache at {}, building", self.path.display());
            self.init_or_update_file().await
        }
    }

    /// Rebuild the summary from the catalog and overwrite the cache file.
    pub async fn init_or_update_file(&self) -> Result<Summary> {
        let summary = self.builder.build().await?;
        SummaryBuilder::persist(&summary, &self.path).await?;
        Ok(summary)
    }

    async fn read(&self) -> Result<Summary> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::parse(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
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

    #[tokio::test]
    async fn test_build_single_definition() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "alice/foo", "Alice", "does foo things");

        let builder = SummaryBuilder::new(Catalog::new(temp_dir.path()));
        let summary = builder.build().await.unwrap();

        assert_eq!(
            summary.entries(),
            &[SummaryEntry::new("alice/foo", "Alice", "does foo things")]
        );
        assert_eq!(
            summary.entries()[0].searchable(),
            "alice/foo | does foo things | Alice"
        );
    }

    #[tokio::test]
    async fn test_build_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let builder = SummaryBuilder::new(Catalog::new(temp_dir.path()));

        let summary = builder.build().await.unwrap();
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn test_build_aborts_on_invalid_definition() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "alice/foo", "Alice", "does foo things");
        fs::write(temp_dir.path().join("alice/bad.json"), r#"{"author":{}}"#).unwrap();

        let builder = SummaryBuilder::new(Catalog::new(temp_dir.path()));
        let err = builder.build().await.unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[tokio::test]
    async fn test_persist_uses_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("summary.json");
        let summary = Summary::new(vec![SummaryEntry::new("alice/foo", "Alice", "foo")]);

        SummaryBuilder::persist(&summary, &path).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"name\": \"alice/foo\""));
    }

    #[tokio::test]
    async fn test_get_summary_builds_then_trusts_cache() {
        let temp_dir = TempDir::new().unwrap();
        let libs = temp_dir.path().join("libs");
        let summary_path = temp_dir.path().join("summary.json");
        write_definition(&libs, "alice/foo", "Alice", "does foo things");

        let store = SummaryStore::new(Catalog::new(&libs), &summary_path);
        let first = store.get_summary().await.unwrap();
        assert!(summary_path.exists());
        let written = fs::read(&summary_path).unwrap();

        // New definitions are not picked up while the cache exists.
        write_definition(&libs, "bob/bar", "Bob", "bar");
        let second = store.get_summary().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read(&summary_path).unwrap(), written);

        let rebuilt = store.init_or_update_file().await.unwrap();
        assert_eq!(rebuilt.len(), 2);
        assert_eq!(store.get_summary().await.unwrap(), rebuilt);
    }

    #[tokio::test]
    async fn test_summary_inside_catalog_can_be_rebuilt() {
        let temp_dir = TempDir::new().unwrap();
        let libs = temp_dir.path().join("libs");
        write_definition(&libs, "alice/foo", "Alice", "does foo things");

        let store = SummaryStore::new(Catalog::new(&libs), libs.join("summary.json"));
        assert_eq!(store.get_summary().await.unwrap().len(), 1);

        write_definition(&libs, "bob/bar", "Bob", "bar");
        let rebuilt = store.init_or_update_file().await.unwrap();
        let names: Vec<_> = rebuilt.entries().iter().map(SummaryEntry::name).collect();
        assert_eq!(names, vec!["alice/foo", "bob/bar"]);
    }

    #[tokio::test]
    async fn test_persist_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.json");
        fs::write(&path, "stale contents that are longer than the new summary").unwrap();

        SummaryBuilder::persist(&Summary::default(), &path).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_definition_outside_catalog_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let builder = SummaryBuilder::new(Catalog::new(temp_dir.path().join("libs")));

        let err = builder
            .definition_name(&temp_dir.path().join("other").join("foo.json"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(
            builder
                .definition_name(&temp_dir.path().join("libs").join("alice").join("foo.json"))
                .unwrap(),
            "alice/foo"
        );
    }

    #[tokio::test]
    async fn test_get_summary_rejects_corrupt_cache() {
        let temp_dir = TempDir::new().unwrap();
        let summary_path = temp_dir.path().join("summary.json");
        fs::write(&summary_path, "not json").unwrap();

        let store = SummaryStore::new(Catalog::new(temp_dir.path()), &summary_path);
        let err = store.get_summary().await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
