//! The fixed set of entry names excluded from every rendering.

use walkdir::DirEntry;

/// Names skipped at every depth, matched case-sensitively against the
/// base name of each entry. For directories this excludes the entire
/// subtree. Immutable for the process lifetime.
pub const IGNORED_ENTRIES: &[&str] = &[
    "vendor",
    "node_modules",
    ".idea",
    ".vscode",
    "dist",
    "build",
    "coverage",
    "tmp",
    "temp",
    "cache",
    "storage",
    ".DS_Store",
    "logs",
    "framework",
    "hot",
    "public",
    "bootstrap",
    ".git",
];

/// Check if an entry's base name is in the ignore set.
pub(crate) fn is_ignored(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| IGNORED_ENTRIES.contains(&s))
        .unwrap_or(false)
}
