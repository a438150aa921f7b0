//! Core data types

use std::path::PathBuf;

/// The outcome of scanning a single project file.
///
/// An empty `missing` list means the project is clean. When the project file
/// itself could not be loaded or parsed, `missing` holds exactly one
/// synthetic entry describing the failure instead of any resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    /// Absolute path of the scanned project file
    pub project: PathBuf,
    /// Missing compile items, sorted for deterministic output
    pub missing: Vec<String>,
}

impl ProjectReport {
    /// Whether the project had no missing items and loaded cleanly
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Count of projects with at least one missing item.
///
/// This is the process exit code the CLI reports for a successful run.
#[must_use]
pub fn projects_with_missing_items(reports: &[ProjectReport]) -> usize {
    reports.iter().filter(|report| !report.is_clean()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(project: &str, missing: &[&str]) -> ProjectReport {
        ProjectReport {
            project: PathBuf::from(project),
            missing: missing.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_clean_report_has_no_missing_items() {
        assert!(report("/a.csproj", &[]).is_clean());
        assert!(!report("/a.csproj", &["/a/missing.cs"]).is_clean());
    }

    #[test]
    fn test_counts_only_projects_with_findings() {
        let reports = vec![
            report("/a.csproj", &[]),
            report("/b.csproj", &["/b/gone.cs"]),
            report("/c.csproj", &["/c/one.cs", "/c/two.cs"]),
        ];
        assert_eq!(projects_with_missing_items(&reports), 2);
    }
}
