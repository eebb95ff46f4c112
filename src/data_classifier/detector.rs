use tracing::{debug, info};

use super::patterns::PATTERN_REGISTRY;
use super::{DetectedColumn, SensitiveColumns};
use crate::dataset::Table;

/// Finds the columns holding at least one value that matches a registry pattern.
///
/// Columns are visited in table order and patterns in registry order. A column
/// is recorded once, under the first pattern that matches any of its non-null
/// values; every column is checked.
pub fn detect_sensitive_columns(table: &Table) -> SensitiveColumns {
    let mut detected = SensitiveColumns::default();

    for (index, name) in table.headers().iter().enumerate() {
        for (data_type, regex) in PATTERN_REGISTRY.iter() {
            let hit = table
                .column_values(index)
                .flatten()
                .any(|value| regex.is_match(value));

            if hit {
                info!(
                    "Sensitive data detected: {} in column {}",
                    data_type.label(),
                    name
                );
                detected.push(DetectedColumn {
                    name: name.clone(),
                    index,
                    data_type: *data_type,
                });
                break;
            }
        }
    }

    debug!("Detection complete: {} sensitive columns", detected.len());
    detected
}
