use crate::error::FileError;
use crate::marker::DATE_FORMAT;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::path::PathBuf;

/// Terminal result for one candidate file.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Timestamps were applied (or would be, in a dry run).
    Updated {
        #[serde(serialize_with = "serialize_fixed")]
        applied: NaiveDateTime,
    },
    /// No usable `**Created:**` line.
    NoCreatedDate,
    /// Reading, parsing or writing times failed.
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: FileError,
    },
}

impl FileOutcome {
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Run totals. `processed == updated + skipped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        if outcome.is_updated() {
            self.updated += 1;
        } else {
            self.skipped += 1;
        }
    }
}

impl<'a> FromIterator<&'a FileOutcome> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a FileOutcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub reports: Vec<FileReport>,
    pub summary: RunSummary,
}

fn serialize_fixed<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&dt.format(DATE_FORMAT))
}

fn serialize_display<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}
