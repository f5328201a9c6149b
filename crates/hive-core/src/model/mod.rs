pub mod definition;
pub mod summary;

pub use definition::{Author, LibraryDefinition};
pub use summary::{short_name, Summary, SummaryEntry, NAME_SEPARATOR, SEARCHABLE_DELIMITER};
