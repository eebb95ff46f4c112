use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::config::GuardConfig;
use crate::data_classifier::{detect_sensitive_columns, SensitiveColumns};
use crate::dataset::{load_table, write_table};
use crate::error::Result;
use crate::utils::anonymizer::Anonymizer;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows: usize,
    pub detected: SensitiveColumns,
    pub masked: Vec<String>,
    pub skipped: Vec<String>,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
}

/// Runs load, detect, mask and write in order.
///
/// A load failure returns before anything is written. Otherwise every stage
/// runs, even when nothing is detected, so the output is always a full copy
/// of the input with detected columns masked.
///
/// # Arguments
/// * `config` - Paths, delimiter and mask dispatch for this run
///
/// # Returns
/// * `Result<RunReport>` - Summary of the run, or the first stage error
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn run(config: &GuardConfig) -> Result<RunReport> {
    let delimiter = config.delimiter_byte()?;

    let mut table = load_table(&config.input, delimiter)?;

    let detected = detect_sensitive_columns(&table);
    if detected.is_empty() {
        info!("No sensitive columns detected");
    }

    if config.dry_run {
        info!("Dry run: {} sensitive columns found, nothing written", detected.len());
        return Ok(RunReport {
            rows: table.row_count(),
            detected,
            masked: Vec::new(),
            skipped: Vec::new(),
            output: None,
        });
    }

    let anonymizer = Anonymizer::new(config.dispatch);
    let summary = anonymizer.mask_columns(&mut table, &detected);
    debug!(
        "Masked {} columns, skipped {}",
        summary.masked.len(),
        summary.skipped.len()
    );

    write_table(&table, &config.output, delimiter)?;

    Ok(RunReport {
        rows: table.row_count(),
        detected,
        masked: summary.masked,
        skipped: summary.skipped,
        output: Some(config.output.clone()),
    })
}
