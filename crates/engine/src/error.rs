use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Any of these aborts the run before a file is touched.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("The directory '{}' does not exist.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file failures. These are folded into a skipped outcome and never end the run.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("time data '{raw}' does not match format '{format}': {source}")]
    InvalidDate {
        raw: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("local time '{0}' does not exist in the current timezone")]
    NonexistentLocalTime(String),

    #[error("Failed to set file times on '{path}': {source}")]
    SetTimes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RestoreError>;
