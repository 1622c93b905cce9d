use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::ParserConfig;
use crate::core::{ResumeRecord, classify};
use crate::error::{ResumeError, Result};
use crate::format::{save_to_json, write_resume};
use crate::utils::pdf::{PageSource, PdfExtractSource, extract_text};

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The record was written to this path
    Saved(PathBuf),
    /// The input file was missing; nothing was written
    InputMissing,
}

/// Extracts and classifies a single resume.
pub fn parse_pdf_resume(source: &dyn PageSource, path: &Path) -> Result<ResumeRecord> {
    let text = extract_text(source, path)?;

    if text.is_empty() {
        warn!("No text extracted from the resume.");
        return Ok(ResumeRecord::new());
    }

    let record = classify(&text);
    debug!(
        "Classified {} lines into {} entries",
        text.split('\n').count(),
        record.entry_count()
    );
    Ok(record)
}

/// Main entry point: parse the configured PDF with `pdf-extract`.
pub fn run(config: &ParserConfig) -> Result<RunOutcome> {
    run_with_source(config, &PdfExtractSource)
}

/// Runs the pipeline with a caller-supplied page source, printing the
/// summary to stdout.
pub fn run_with_source(config: &ParserConfig, source: &dyn PageSource) -> Result<RunOutcome> {
    run_with_output(config, source, &mut io::stdout().lock())
}

/// Runs the pipeline, writing the summary to `summary`.
///
/// A missing input is a controlled stop, not an error. A summary that cannot
/// be written ends the run before the JSON file is created.
pub fn run_with_output(
    config: &ParserConfig,
    source: &dyn PageSource,
    summary: &mut dyn Write,
) -> Result<RunOutcome> {
    if !config.input_exists() {
        error!("The provided file path does not exist.");
        return Ok(RunOutcome::InputMissing);
    }

    let record = parse_pdf_resume(source, &config.input)?;

    if config.print_summary {
        write_resume(summary, &record).map_err(|e| {
            let err = ResumeError::Console(e);
            error!("{}", err);
            err
        })?;
    }

    save_to_json(&record, &config.output)?;
    info!("Resume data saved to {}", config.output.display());

    Ok(RunOutcome::Saved(config.output.clone()))
}
