use crate::error::{FileError, RestoreError, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Name suffix that marks a directory entry as a note.
pub const NOTE_SUFFIX: &str = ".md";

/// A directory entry selected by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub path: PathBuf,
}

/// List the immediate entries of `dir` whose name ends in [`NOTE_SUFFIX`].
///
/// The check is on the name only, so a subdirectory called `x.md` is listed too.
/// Entries the listing fails to yield are dropped.
///
/// # Errors
/// Returns an error if `dir` is not a directory or cannot be listed.
pub fn list_candidates(dir: &Path) -> Result<Vec<Candidate>> {
    if !dir.is_dir() {
        return Err(RestoreError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| RestoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let candidates = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            name.ends_with(NOTE_SUFFIX).then(|| Candidate {
                name,
                path: entry.path(),
            })
        })
        .collect();

    Ok(candidates)
}

/// Read a note as UTF-8 text.
///
/// # Errors
/// Returns [`FileError::FileRead`] on I/O failure or invalid UTF-8.
pub fn read_note(path: &Path) -> std::result::Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Set both the access and modification time of `path` to `time`.
///
/// # Errors
/// Returns [`FileError::SetTimes`] if the file cannot be opened or its times
/// cannot be written.
pub fn set_file_times(path: &Path, time: SystemTime) -> std::result::Result<(), FileError> {
    let times = fs::FileTimes::new().set_accessed(time).set_modified(time);
    open_for_times(path)
        .and_then(|file| file.set_times(times))
        .map_err(|source| FileError::SetTimes {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;
    // FILE_WRITE_ATTRIBUTES
    fs::OpenOptions::new().access_mode(0x100).open(path)
}

#[cfg(not(windows))]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    File::open(path)
}
