//! Plain-text output formatter

use crate::types::ProjectReport;
use std::fmt::Write;

/// Render reports as the plain-text findings list.
///
/// Each project with at least one missing item appears as a delimiter line
/// `~~{project}~~` followed by one line per missing item. Clean projects are
/// omitted; a fully clean run renders as the empty string.
#[must_use]
pub fn to_text(reports: &[ProjectReport]) -> String {
    let mut output = String::new();

    for report in reports.iter().filter(|report| !report.is_clean()) {
        let _ = writeln!(output, "~~{}~~", report.project.display());
        for item in &report.missing {
            output.push_str(item);
            output.push('\n');
        }
    }

    output
}
