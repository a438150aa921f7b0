//! Projscan Scanner - missing Compile item detection for MSBuild projects
//!
//! This crate provides read-only scanning of a directory tree for MSBuild
//! project files, reporting every declared `Compile` item whose file no
//! longer exists on disk.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod discover;
pub mod error;
pub mod output;
pub mod project;
pub mod resolve;
pub mod scan;
pub mod types;

pub use error::{ScanError, ScanResult};
pub use scan::Scanner;
pub use types::{projects_with_missing_items, ProjectReport};
