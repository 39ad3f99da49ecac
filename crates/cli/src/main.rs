use clap::Parser;
use restore_note_dates_cli::args::Args;
use restore_note_dates_cli::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();
    let config = Config::from(args);

    match restore_note_dates_cli::run(&config) {
        Ok(summary) => {
            log::debug!("finished: {summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
