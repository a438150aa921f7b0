//! XML output formatter

use crate::error::{ScanError, ScanResult};
use crate::types::{projects_with_missing_items, ProjectReport};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Render reports as an XML findings document.
///
/// The document has a `ProjScan` root, one `Project` element (with a `Name`
/// attribute) per project with at least one missing item, and one `Item`
/// child per missing entry. A fully clean run renders as the empty string
/// with no root element, preserving the tool's historical behavior.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_xml(reports: &[ProjectReport]) -> ScanResult<String> {
    if projects_with_missing_items(reports) == 0 {
        return Ok(String::new());
    }

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Start(BytesStart::new("ProjScan")))
        .map_err(render_error)?;

    for report in reports.iter().filter(|report| !report.is_clean()) {
        let name = report.project.display().to_string();
        let mut project = BytesStart::new("Project");
        project.push_attribute(("Name", name.as_str()));
        writer
            .write_event(Event::Start(project))
            .map_err(render_error)?;

        for item in &report.missing {
            writer
                .write_event(Event::Start(BytesStart::new("Item")))
                .map_err(render_error)?;
            writer
                .write_event(Event::Text(BytesText::new(item)))
                .map_err(render_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("Item")))
                .map_err(render_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("Project")))
            .map_err(render_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("ProjScan")))
        .map_err(render_error)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(render_error)
}

fn render_error(err: impl std::fmt::Display) -> ScanError {
    ScanError::Render(err.to_string())
}
