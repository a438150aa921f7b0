//! Main scanner implementation

use crate::discover::find_project_files;
use crate::error::ScanResult;
use crate::project::scan_project;
use crate::types::ProjectReport;
use rayon::prelude::*;
use std::path::Path;

/// The main scanner struct
#[derive(Debug, Default)]
pub struct Scanner;

impl Scanner {
    /// Create a new scanner
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scan every supported project file under `root` for missing compile
    /// items.
    ///
    /// Projects are scanned independently and in parallel; one report is
    /// returned per discovered project file. A project that fails to parse
    /// contributes a report carrying a synthetic error entry. Only a
    /// discovery failure (unreadable root, traversal error) aborts the run.
    ///
    /// # Errors
    /// Returns an error if project discovery fails.
    pub fn execute(&self, root: &Path) -> ScanResult<Vec<ProjectReport>> {
        let projects = find_project_files(root)?;

        Ok(projects
            .par_iter()
            .map(|project| scan_project(project))
            .collect())
    }
}
