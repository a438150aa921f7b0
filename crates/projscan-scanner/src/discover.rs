//! Project file discovery
//!
//! Walks a directory tree and yields every file whose extension matches one
//! of the supported MSBuild project dialects.

use crate::error::ScanResult;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as MSBuild project files (matched
/// case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["csproj", "fsproj", "synproj", "vbproj"];

/// Find every supported project file under `root` and its subdirectories.
///
/// The root is canonicalized first so every returned path is absolute.
/// Traversal order is whatever the filesystem yields; no path appears twice.
/// A traversal error (e.g. permission denied on a subdirectory) aborts the
/// whole discovery.
///
/// # Errors
/// Returns an error if the root cannot be canonicalized or traversal fails.
pub fn find_project_files(root: &Path) -> ScanResult<Vec<PathBuf>> {
    let root = root.canonicalize()?;

    let mut projects = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if entry.file_type().is_file() && has_supported_extension(entry.path()) {
            projects.push(entry.into_path());
        }
    }

    Ok(projects)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
