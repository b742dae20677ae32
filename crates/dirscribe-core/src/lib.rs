//! Dirscribe core - renders a directory tree as indented text.
//!
//! Walks a directory depth-first, skips a fixed set of dependency and
//! build-artifact names, lists subdirectories before files at each level,
//! and indents each line by its nesting depth.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> dirscribe_core::ScanResult<()> {
//!     let text = dirscribe_core::generate(
//!         Path::new("."),
//!         Path::new("project-structure.txt"),
//!     )?;
//!
//!     print!("{}", text);
//!     Ok(())
//! }
//! ```

mod error;
mod ignore;
mod scan;

// Re-export public API
pub use error::{ScanError, ScanResult};
pub use ignore::IGNORED_ENTRIES;
pub use scan::{generate, render_structure};
