use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use privacy_guard::utils::anonymizer::MaskDispatch;
use privacy_guard::utils::logger::init_logger;
use privacy_guard::{run, GuardConfig, GuardError, RunReport};

const EXIT_SUCCESS: u8 = 0;
const EXIT_LOAD_FAILURE: u8 = 1;
const EXIT_WRITE_FAILURE: u8 = 2;
const EXIT_SETUP_FAILURE: u8 = 3;

/// Mask email and phone columns in a CSV dataset
#[derive(Debug, Parser)]
#[command(name = "privacy_guard", version, about)]
struct Cli {
    /// Settings file (defaults to ./privacy_guard.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset to scan
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path for the masked copy
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,

    /// How flagged columns choose their mask
    #[arg(long, value_enum)]
    dispatch: Option<MaskDispatch>,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Report detections without writing output
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn apply(self, mut config: GuardConfig) -> GuardConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(dispatch) = self.dispatch {
            config.dispatch = dispatch;
        }
        if let Some(log_dir) = self.log_dir {
            config.log_dir = Some(log_dir);
        }
        config.dry_run |= self.dry_run;
        config
    }
}

fn setup(cli: Cli) -> Result<GuardConfig> {
    let config = GuardConfig::load(cli.config.as_deref())?;
    let config = cli.apply(config);
    init_logger(config.log_dir.as_deref())?;
    Ok(config)
}

fn main() -> ExitCode {
    let config = match setup(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("privacy_guard: {e:#}");
            return ExitCode::from(EXIT_SETUP_FAILURE);
        }
    };

    let result = run(&config);
    match &result {
        Ok(report) => match &report.output {
            Some(path) => info!(
                "Completed: {} rows, {} sensitive columns, {} masked, output {}",
                report.rows,
                report.detected.len(),
                report.masked.len(),
                path.display()
            ),
            None => info!(
                "Completed dry run: {} rows, sensitive columns: {:?}",
                report.rows,
                report.detected.names()
            ),
        },
        // Stage errors are logged where they occur.
        Err(e) if e.is_load_failure() => info!("Pipeline halted, no output written"),
        Err(GuardError::Write { .. }) => info!("Pipeline stopped while saving output"),
        Err(e) => error!("Pipeline failed: {}", e),
    }

    ExitCode::from(exit_code(&result))
}

/// Process exit status for a pipeline outcome.
fn exit_code(result: &privacy_guard::Result<RunReport>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) if e.is_load_failure() => EXIT_LOAD_FAILURE,
        Err(GuardError::Write { .. }) => EXIT_WRITE_FAILURE,
        Err(_) => EXIT_SETUP_FAILURE,
    }
}
