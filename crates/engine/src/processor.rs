use crate::config::RestoreOptions;
use crate::error::FileError;
use crate::filesystem::{self, Candidate};
use crate::marker;
use crate::stats::{FileOutcome, FileReport};
use std::time::SystemTime;

/// Process a single candidate and classify the result.
///
/// Never fails: every error is captured in the returned outcome.
#[must_use]
pub fn process_file(candidate: Candidate, options: &RestoreOptions) -> FileReport {
    let outcome = match restore_one(&candidate, options) {
        Ok(outcome) => outcome,
        Err(error) => {
            log::warn!("{}: {error}", candidate.path.display());
            FileOutcome::Failed { error }
        }
    };
    FileReport {
        name: candidate.name,
        path: candidate.path,
        outcome,
    }
}

fn restore_one(candidate: &Candidate, options: &RestoreOptions) -> Result<FileOutcome, FileError> {
    let content = filesystem::read_note(&candidate.path)?;

    let Some(raw) = marker::find_created(&content) else {
        log::debug!("{}: no created marker", candidate.path.display());
        return Ok(FileOutcome::NoCreatedDate);
    };

    let naive = marker::parse_created(&raw)?;
    let local = marker::to_local(naive)?;

    if options.dry_run {
        log::debug!("{}: dry run, would apply {local}", candidate.path.display());
    } else {
        filesystem::set_file_times(&candidate.path, SystemTime::from(local))?;
        log::debug!("{}: applied {local}", candidate.path.display());
    }

    Ok(FileOutcome::Updated { applied: naive })
}
