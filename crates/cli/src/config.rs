// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use restore_note_dates_engine::RestoreOptions;
use std::path::PathBuf;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub restore: RestoreOptions,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let restore = RestoreOptions {
            dry_run: args.dry_run,
            sorted: args.sorted,
        };
        Self {
            directory: args.directory,
            restore,
            format: args.format,
        }
    }
}
