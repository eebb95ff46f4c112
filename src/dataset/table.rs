use std::collections::HashSet;

use crate::error::TableError;

/// A single cell. `None` is a null/missing value.
pub type Cell = Option<String>;

/// In-memory table: ordered, uniquely named columns and rows aligned to them.
///
/// Row count and column order are fixed once the table is built; only cell
/// contents can change, through [`Table::map_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table, checking header uniqueness and row widths.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(headers.len());
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let expected = headers.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(TableError::RowWidth {
                    row,
                    found: cells.len(),
                    expected,
                });
            }
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Iterates the cells of one column in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|cell| cell.as_deref()))
    }

    /// Rewrites every non-null cell of a column in place. Nulls are left as is.
    pub fn map_column<F>(&mut self, index: usize, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for row in &mut self.rows {
            if let Some(Some(value)) = row.get_mut(index) {
                *value = f(value);
            }
        }
    }
}
