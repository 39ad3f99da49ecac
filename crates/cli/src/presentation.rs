// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use restore_note_dates_engine::marker::DATE_FORMAT;
use restore_note_dates_engine::{FileOutcome, FileReport, RunResult, RunSummary};

pub fn print_results(result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// Render the scan header, one line per note, and the summary block.
#[must_use]
pub fn render_text(result: &RunResult) -> String {
    let mut lines = vec![
        format!("Scanning directory: {}", result.directory.display()),
        String::new(),
    ];
    lines.extend(
        result
            .reports
            .iter()
            .map(|report| report_line(report, result.dry_run)),
    );
    lines.push(String::new());
    lines.extend(summary_lines(&result.summary));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn report_line(report: &FileReport, dry_run: bool) -> String {
    let name = &report.name;
    match &report.outcome {
        FileOutcome::Updated { applied } => {
            let verb = if dry_run { "Would update" } else { "Updated" };
            format!("{verb}: {name} -> {}", applied.format(DATE_FORMAT))
        }
        FileOutcome::NoCreatedDate => format!("Skipped: {name} (No created date found)"),
        FileOutcome::Failed { error } => format!("Error processing {name}: {error}"),
    }
}

fn summary_lines(summary: &RunSummary) -> [String; 5] {
    [
        "--- Summary ---".to_string(),
        format!("Total files scanned: {}", summary.processed),
        format!("Files updated: {}", summary.updated),
        format!("Files skipped: {}", summary.skipped),
        "---------------".to_string(),
    ]
}
