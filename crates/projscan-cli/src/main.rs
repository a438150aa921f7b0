//! projscan CLI - find missing Compile items in MSBuild projects
//!
//! Scans a directory tree for supported project files and reports every
//! declared Compile item whose file no longer exists on disk. The process
//! exit code is the number of projects with at least one missing item.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use projscan_scanner::output::{to_text, to_xml};
use projscan_scanner::{projects_with_missing_items, Scanner};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

/// Exit code for a help request or bad arguments
const EXIT_USAGE: i32 = 21;
/// Exit code when the target directory does not exist
const EXIT_TARGET_NOT_FOUND: i32 = 9009;

#[derive(Parser)]
#[command(name = "projscan")]
#[command(about = "Scan a directory tree for MSBuild projects with missing Compile items")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(
    after_help = "Exit codes: 21 for usage/help, 9009 if the target directory does not exist, \
                  otherwise the number of projects with missing Compile items."
)]
struct Cli {
    /// Directory to scan for project files
    #[arg(value_name = "TARGET_DIRECTORY")]
    target_directory: PathBuf,

    /// Emit the report as XML instead of plain text
    #[arg(long)]
    xml: bool,
}

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    // clap cannot express the historical -? and /? help tokens, so all help
    // requests are intercepted before parsing.
    if args.iter().skip(1).any(|arg| is_help_token(arg)) {
        print_usage();
        process::exit(EXIT_USAGE);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            let _ = err.print();
            process::exit(0);
        }
        Err(err) => {
            let _ = err.print();
            process::exit(EXIT_USAGE);
        }
    };

    if !cli.target_directory.is_dir() {
        println!(
            "The specified path {} is not valid.",
            cli.target_directory.display()
        );
        process::exit(EXIT_TARGET_NOT_FOUND);
    }

    match run(&cli) {
        Ok(projects_with_findings) => {
            process::exit(i32::try_from(projects_with_findings).unwrap_or(i32::MAX));
        }
        Err(err) => {
            eprintln!("projscan: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let reports = Scanner::new().execute(&cli.target_directory)?;

    let rendered = if cli.xml {
        to_xml(&reports)?
    } else {
        to_text(&reports)
    };
    print!("{rendered}");

    Ok(projects_with_missing_items(&reports))
}

fn is_help_token(arg: &OsString) -> bool {
    matches!(arg.to_str(), Some("-h" | "--help" | "-?" | "/?"))
}

fn print_usage() {
    let _ = Cli::command().print_long_help();
}
