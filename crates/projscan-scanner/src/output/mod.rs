//! Output formatters for scan reports

pub mod text;
pub mod xml;

pub use text::to_text;
pub use xml::to_xml;
