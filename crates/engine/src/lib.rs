// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod marker;
pub mod processor;
pub mod stats;

pub use crate::config::{RestoreOptions, RestoreOptionsBuilder};
pub use crate::error::{FileError, RestoreError, Result};
pub use crate::stats::{FileOutcome, FileReport, RunResult, RunSummary};

/// Restores note file timestamps from their embedded creation date.
#[derive(Debug, Clone, Default)]
pub struct DateRestorer {
    options: RestoreOptions,
}

impl DateRestorer {
    #[must_use]
    pub const fn new(options: RestoreOptions) -> Self {
        Self { options }
    }

    /// Run over the immediate `.md` entries of `directory`.
    ///
    /// Returns a `RunResult` holding one report per candidate and the totals.
    ///
    /// # Errors
    ///
    /// Returns an error only when `directory` is not a directory or cannot be
    /// listed. In that case no file has been touched. Per-file failures are
    /// recorded as skipped reports instead.
    pub fn restore(&self, directory: &Path) -> Result<RunResult> {
        let mut candidates = filesystem::list_candidates(directory)?;
        if self.options.sorted {
            candidates.sort_by(|a, b| a.name.cmp(&b.name));
        }

        log::info!(
            "restoring {} candidate(s) in {}{}",
            candidates.len(),
            directory.display(),
            if self.options.dry_run { " (dry run)" } else { "" }
        );

        let reports: Vec<FileReport> = candidates
            .into_iter()
            .map(|candidate| processor::process_file(candidate, &self.options))
            .collect();
        let summary: RunSummary = reports.iter().map(|r| &r.outcome).collect();

        log::info!(
            "processed={} updated={} skipped={}",
            summary.processed,
            summary.updated,
            summary.skipped
        );

        Ok(RunResult {
            directory: directory.to_path_buf(),
            dry_run: self.options.dry_run,
            reports,
            summary,
        })
    }
}
