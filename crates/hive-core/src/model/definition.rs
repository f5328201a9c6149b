use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The author block of a library definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,

    /// Any other author fields present in the definition (email, url, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A library definition as authored in the catalog directory.
///
/// Only `author.name` and `description` are interpreted; every other
/// top-level field is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryDefinition {
    /// Canonical catalog key, e.g. `alice/foo`.
    #[serde(skip)]
    pub name: String,
    pub author: Author,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LibraryDefinition {
    /// Validate a parsed JSON document and turn it into a definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the document is not an object or if
    /// `author.name` or `description` is missing or not a string.
    pub fn from_value(name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();
        let schema_error = |field| Error::Schema {
            name: name.clone(),
            field,
        };

        let Value::Object(mut fields) = value else {
            return Err(schema_error("author.name"));
        };

        let author = match fields.remove("author") {
            Some(Value::Object(mut author)) => match author.remove("name") {
                Some(Value::String(author_name)) => Author {
                    name: author_name,
                    extra: author,
                },
                _ => return Err(schema_error("author.name")),
            },
            _ => return Err(schema_error("author.name")),
        };

        let description = match fields.remove("description") {
            Some(Value::String(description)) => description,
            _ => return Err(schema_error("description")),
        };

        Ok(Self {
            name,
            author,
            description,
            extra: fields,
        })
    }
}
