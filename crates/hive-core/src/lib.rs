//! Core domain model for hive.
//!
//! This crate defines library definitions as authored in the catalog
//! directory, the derived summary entries used for searching, and the
//! catalog scanner and record reader that connect the two.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Author, LibraryDefinition, Summary, SummaryEntry};
