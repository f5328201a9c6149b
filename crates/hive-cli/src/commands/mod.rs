pub mod config;
pub mod rebuild;
pub mod search;
pub mod show;

pub use rebuild::run_rebuild;
pub use search::{run_best, run_matches, run_resolve, run_search};
pub use show::show_library;
