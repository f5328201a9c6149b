//! Access to the catalog directory of library definition files.
//!
//! The catalog is a directory tree of `<author>/<library>.json` files. The
//! path of each file relative to the catalog root, without its extension,
//! is the library's canonical name.

use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::model::LibraryDefinition;

const DEFINITION_EXTENSION: &str = "json";

/// A catalog rooted at a directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn is_definition_file(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == DEFINITION_EXTENSION)
    }

    /// List every definition file under the catalog directory.
    ///
    /// The walk is recursive and sorted by file name within each directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the catalog directory is missing, is not a
    /// directory, or cannot be read.
    pub async fn list_definition_paths(&self) -> Result<Vec<PathBuf>> {
        let metadata = tokio::fs::metadata(&self.dir)
            .await
            .map_err(|e| Error::io(&self.dir, e))?;
        if !metadata.is_dir() {
            return Err(Error::io(
                &self.dir,
                io::Error::new(io::ErrorKind::InvalidInput, "catalog path is not a directory"),
            ));
        }

        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || Self::walk(&dir))
            .await
            .map_err(|e| Error::io(&self.dir, io::Error::other(e)))?
    }

    fn walk(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                Error::io(path, e.into())
            })?;

            let path = entry.path();
            if path.is_file() && Self::is_definition_file(path) {
                log::debug!("Found definition: {}", path.display());
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    /// Derive the canonical name of a definition file, e.g.
    /// `<catalog>/alice/foo.json` becomes `alice/foo`.
    ///
    /// Returns `None` for paths outside the catalog.
    pub fn canonical_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.dir).ok()?.with_extension("");
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    /// The file a canonical name resolves to.
    pub fn definition_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{DEFINITION_EXTENSION}"))
    }

    /// Load and validate a single library definition by canonical name.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no file exists for `name` (or `name` would
    ///   resolve outside the catalog)
    /// - [`Error::Io`] if the file exists but cannot be read
    /// - [`Error::Parse`] if the file is not valid JSON
    /// - [`Error::Schema`] if a required field is missing
    pub async fn load_definition(&self, name: &str) -> Result<LibraryDefinition> {
        let path = self.definition_path(name);

        let stays_inside = !name.is_empty()
            && Path::new(name)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !stays_inside {
            return Err(Error::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    name: name.to_string(),
                    path,
                });
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| Error::parse(&path, e))?;
        LibraryDefinition::from_value(name, value)
    }
}
