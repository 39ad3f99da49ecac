// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use restore_note_dates_engine::{DateRestorer, RunSummary};

/// Run one restore pass and print its results.
///
/// # Errors
/// Returns an error if the target is not a listable directory, in which case
/// nothing is printed to stdout, or if JSON output cannot be serialised.
pub fn run(config: &Config) -> Result<RunSummary> {
    let restorer = DateRestorer::new(config.restore.clone());
    let result = restorer.restore(&config.directory)?;
    presentation::print_results(&result, config.format)?;
    Ok(result.summary)
}
