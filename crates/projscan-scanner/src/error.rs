//! Error types for the projscan scanner

use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Project file is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A Compile element has no Include attribute
    #[error("Compile element without Include attribute in {project}")]
    MissingIncludeAttribute {
        /// Path of the project file containing the offending element
        project: String,
    },

    /// Failed to serialize the XML report
    #[error("Report serialization failed: {0}")]
    Render(String),
}
