//! Directory walking and structure rendering.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ScanError, ScanResult};
use crate::ignore::is_ignored;

/// Render the structure of `source` and write it to `output_file`,
/// overwriting any existing file. Returns the rendered text.
pub fn generate(source: &Path, output_file: &Path) -> ScanResult<String> {
    let text = render_structure(source)?;

    fs::write(output_file, &text).map_err(|err| ScanError::OutputWrite {
        path: output_file.to_path_buf(),
        source: err,
    })?;

    info!(
        source = %source.display(),
        output = %output_file.display(),
        bytes = text.len(),
        "Structure written"
    );

    Ok(text)
}

/// Walk `source` depth-first and render one line per entry: directories
/// (with their full subtree) before files at each level, names prefixed
/// with one dash per nesting level and directories suffixed with `/`.
pub fn render_structure(source: &Path) -> ScanResult<String> {
    validate_source(source)?;

    let mut output = String::new();

    // Listing failures below the root are dropped by filter_map: an
    // unreadable subdirectory contributes an empty subtree, not an error.
    for entry in WalkDir::new(source)
        .sort_by(dirs_first)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e))
        .filter_map(|e| e.ok())
    {
        // The scan root itself is not part of the rendering.
        if entry.depth() == 0 {
            continue;
        }

        let level = entry.depth() - 1;
        if level > 0 {
            for _ in 0..level {
                output.push('-');
            }
            output.push(' ');
        }
        output.push_str(&entry.file_name().to_string_lossy());
        if entry.file_type().is_dir() {
            output.push('/');
        }
        output.push('\n');
    }

    debug!(
        source = %source.display(),
        lines = output.lines().count(),
        "Rendered structure"
    );

    Ok(output)
}

/// Order directories before files within each listed directory. The sort
/// is stable, so the OS listing order survives within each class.
fn dirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type().is_dir().cmp(&a.file_type().is_dir())
}

/// Require the source to be an existing, listable directory. A root that
/// cannot be read is an error, unlike listing failures deeper in the walk.
fn validate_source(path: &Path) -> ScanResult<()> {
    let meta =
        fs::metadata(path).map_err(|err| ScanError::invalid_source(path, err.to_string()))?;

    if !meta.is_dir() {
        return Err(ScanError::invalid_source(path, "not a directory"));
    }

    fs::read_dir(path).map_err(|err| ScanError::invalid_source(path, err.to_string()))?;

    Ok(())
}
