// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "restore-note-dates",
    version,
    about = "Set note file timestamps from the **Created:** line inside each note",
    long_about = "Scans a directory (not recursively) for .md files, reads the first \
                  `**Created:** YYYY-MM-DD HH:MM:SS` line of each, and sets the file's \
                  access and modification time to that local date and time."
)]
pub struct Args {
    /// Directory containing the exported notes
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Show what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Process notes in file name order
    #[arg(long)]
    pub sorted: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
