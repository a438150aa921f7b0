//! Compile reference path resolution
//!
//! Include attributes in MSBuild project files are written relative to the
//! project file's own directory, usually with backslash separators. This
//! module turns a raw attribute value into the canonical absolute path it
//! denotes, without touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolve a raw `Include` value against the directory containing the
/// project file that declared it.
///
/// Backslashes are treated as path separators regardless of host platform,
/// and `.`/`..` segments are collapsed lexically, so the result matches what
/// a URI-based path resolver would produce rather than a naive string
/// concatenation.
#[must_use]
pub fn resolve_reference(project_dir: &Path, raw: &str) -> PathBuf {
    let relative = raw.replace('\\', "/");
    normalize(&project_dir.join(relative))
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// A `..` at the root is dropped, matching URI canonicalization. The input
/// is expected to be absolute (discovery yields absolute project paths).
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
