//! Directory Walker
//!
//! Finds every documentation file under a root directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of documentation files, without the dot
pub const DOC_EXTENSION: &str = "md";

/// Recursively collect documentation files under `root`, sorted by path.
///
/// Fails if `root` (or any directory below it) cannot be read, including
/// when it does not exist. Symlinked directories are not followed.
pub fn find_documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(root, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {}", path.display()))?;

        if file_type.is_dir() {
            collect(&path, found)?;
        } else if is_document(&path) && path.is_file() {
            found.push(path);
        }
    }

    Ok(())
}

fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DOC_EXTENSION)
}
