//! Human and JSON rendering of a run report

use colored::Colorize;

use cleaner_core::{Mode, RunReport};

use crate::error::Result;

/// Print the report as pretty JSON on stdout.
pub fn print_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print diffs (check mode) or updated paths (update mode).
///
/// Diffs go out uncoloured so they can be piped into `patch`.
pub fn print_human(report: &RunReport) {
    match report.mode {
        Mode::Check => {
            for artifact in report.drifted() {
                if let Some(diff) = &artifact.diff {
                    print!("{diff}");
                }
            }
        }
        Mode::Update => {
            for artifact in report.updated() {
                println!("{} {}", "Updating".yellow().bold(), artifact.path);
            }
        }
    }

    if report.is_success() {
        println!("{} Build files are up to date.", "OK".green().bold());
    }
}
