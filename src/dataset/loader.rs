use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, error, info};

use super::table::{Cell, Table};
use crate::error::{GuardError, Result};

/// Loads a delimited text file into a [`Table`], using the first row as headers.
///
/// Empty fields load as nulls. Every field count must match the header row.
///
/// # Errors
/// * [`GuardError::NotFound`] - the path is not a readable file
/// * [`GuardError::EmptyInput`] - no header row; a header with no records loads as an empty table
/// * [`GuardError::Load`] - bad encoding, ragged rows, duplicate headers, other I/O
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table> {
    debug!("Loading table from {}", path.display());

    if !path.is_file() {
        error!("File not found. Please provide a valid file path: {}", path.display());
        return Err(GuardError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            error!("File not found. Please provide a valid file path: {}", path.display());
            GuardError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            load_error(path, e)
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| load_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        error!("No data found. The file is empty: {}", path.display());
        return Err(GuardError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| load_error(path, e))?;
        let row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    let table = Table::new(headers, rows).map_err(|e| load_error(path, e))?;
    info!(
        "Data loaded successfully: {} rows, {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

fn load_error(path: &Path, err: impl std::fmt::Display) -> GuardError {
    error!("An error occurred while loading data from {}: {}", path.display(), err);
    GuardError::Load {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
