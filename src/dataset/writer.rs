use std::path::Path;

use csv::WriterBuilder;
use tracing::{error, info};

use super::table::Table;
use crate::error::{GuardError, Result};

/// Writes a [`Table`] as delimited text: header row first, then one line per row.
///
/// Nulls are written as empty fields. The file is created or truncated.
pub fn write_table(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| write_error(path, e))?;

    writer
        .write_record(table.headers())
        .map_err(|e| write_error(path, e))?;

    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e))?;

    info!("Masked data saved to {}", path.display());
    Ok(())
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> GuardError {
    error!("An error occurred while saving data to {}: {}", path.display(), err);
    GuardError::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
