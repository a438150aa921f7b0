//! Single-project scanner
//!
//! Parses one MSBuild project file, resolves every declared `Compile` item
//! to an absolute path, and checks which of them exist on disk. A project
//! that fails to load degrades to a report with one synthetic error entry
//! rather than aborting the run.

use crate::error::{ScanError, ScanResult};
use crate::resolve::resolve_reference;
use crate::types::ProjectReport;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Namespace used by MSBuild project files for Compile item declarations
pub const MSBUILD_NS: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Scan a single project file for missing compile items.
///
/// Never fails: load/parse errors are captured as a single synthetic missing
/// item so that one corrupt project cannot poison the rest of a run. The
/// existence checks for a project's references run in parallel; the missing
/// items are sorted before the report is finalized.
#[must_use]
pub fn scan_project(project_path: &Path) -> ProjectReport {
    let mut missing = match compile_references(project_path) {
        Ok(references) => references
            .into_par_iter()
            .filter(|reference| !reference.exists())
            .map(|reference| reference.display().to_string())
            .collect(),
        Err(err) => vec![format!("Failed to load project: {err}")],
    };
    missing.sort();

    ProjectReport {
        project: project_path.to_path_buf(),
        missing,
    }
}

/// Extract every declared compile reference from a project file, resolved to
/// the absolute path it denotes.
///
/// A `Compile` element without an `Include` attribute is malformed input and
/// fails the whole project rather than being skipped.
///
/// # Errors
/// Returns an error if the file cannot be read, is not well-formed XML, or
/// declares a `Compile` element without an `Include` attribute.
pub fn compile_references(project_path: &Path) -> ScanResult<Vec<PathBuf>> {
    let content = fs::read_to_string(project_path)?;
    let doc = roxmltree::Document::parse(&content)?;

    let project_dir = project_path.parent().unwrap_or(Path::new(""));

    let mut references = Vec::new();
    for node in doc
        .descendants()
        .filter(|node| node.has_tag_name((MSBUILD_NS, "Compile")))
    {
        let include =
            node.attribute("Include")
                .ok_or_else(|| ScanError::MissingIncludeAttribute {
                    project: project_path.display().to_string(),
                })?;
        references.push(resolve_reference(project_dir, include));
    }

    Ok(references)
}
