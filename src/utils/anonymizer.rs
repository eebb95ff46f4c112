use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::data_classifier::{DetectedColumn, SensitiveColumns, SensitiveDataType};
use crate::dataset::Table;

/// Placeholder that replaces the hidden part of a value.
pub const MASK: &str = "*****";

/// Prefix that replaces everything but the last four characters of a phone value.
pub const PHONE_MASK_PREFIX: &str = "***-***-";

/// How a flagged column picks its transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MaskDispatch {
    /// Use the label of the pattern that flagged the column.
    #[default]
    Label,
    /// Look for "email" or "phone" in the column name. Flagged columns whose
    /// names contain neither are left untouched.
    ColumnName,
}

/// Outcome of a masking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskSummary {
    pub masked: Vec<String>,
    pub skipped: Vec<String>,
}

/// Keeps the first character of the local part, hides the rest, keeps the domain.
///
/// Splits on the first `@`. A local part of one character or less is fully
/// replaced. A value without `@` has no domain and comes back fully masked.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return MASK.to_string();
    };

    let mut chars = local.chars();
    let masked_local = match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{first}{MASK}"),
        _ => MASK.to_string(),
    };

    format!("{masked_local}@{domain}")
}

/// Keeps the last four characters verbatim behind a fixed prefix.
pub fn mask_phone(phone: &str) -> String {
    let count = phone.chars().count();
    let tail: String = phone.chars().skip(count.saturating_sub(4)).collect();
    format!("{PHONE_MASK_PREFIX}{tail}")
}

#[derive(Debug, Clone, Default)]
pub struct Anonymizer {
    dispatch: MaskDispatch,
}

impl Anonymizer {
    pub fn new(dispatch: MaskDispatch) -> Self {
        Anonymizer { dispatch }
    }

    #[inline]
    pub fn anonymize_value(&self, value: &str, ty: SensitiveDataType) -> String {
        match ty {
            SensitiveDataType::Email => {
                if !value.contains('@') {
                    debug!("Value in an email column has no '@'; masking it whole");
                }
                mask_email(value)
            }
            SensitiveDataType::Phone => mask_phone(value),
        }
    }

    /// The transform a flagged column receives, if any.
    pub fn transform_for(&self, column: &DetectedColumn) -> Option<SensitiveDataType> {
        match self.dispatch {
            MaskDispatch::Label => Some(column.data_type),
            MaskDispatch::ColumnName => {
                if column.name.contains("email") {
                    Some(SensitiveDataType::Email)
                } else if column.name.contains("phone") {
                    Some(SensitiveDataType::Phone)
                } else {
                    None
                }
            }
        }
    }

    /// Masks every non-null value of the flagged columns in place.
    pub fn mask_columns(&self, table: &mut Table, columns: &SensitiveColumns) -> MaskSummary {
        let mut summary = MaskSummary::default();

        for column in columns {
            let Some(ty) = self.transform_for(column) else {
                warn!(
                    "Column {} was flagged as {} but its name selects no mask; left unchanged",
                    column.name, column.data_type
                );
                summary.skipped.push(column.name.clone());
                continue;
            };

            table.map_column(column.index, |value| self.anonymize_value(value, ty));
            info!("Data in column {} has been masked.", column.name);
            summary.masked.push(column.name.clone());
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    fn flagged(entries: &[(&str, usize, SensitiveDataType)]) -> SensitiveColumns {
        let mut columns = SensitiveColumns::default();
        for (name, index, data_type) in entries {
            columns.push(DetectedColumn {
                name: name.to_string(),
                index: *index,
                data_type: *data_type,
            });
        }
        columns
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john.doe@example.com"), "j*****@example.com");
        assert_eq!(mask_email("ab@x.io"), "a*****@x.io");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("j@example.com"), "*****@example.com");
        assert_eq!(mask_email("@example.com"), "*****@example.com");
    }

    #[test]
    fn test_mask_email_splits_on_first_at() {
        assert_eq!(mask_email("ann@b@c.com"), "a*****@b@c.com");
    }

    #[test]
    fn test_mask_email_without_at() {
        assert_eq!(mask_email("not an email"), "*****");
    }

    #[test]
    fn test_mask_email_multibyte_first_char() {
        assert_eq!(mask_email("élodie@example.fr"), "é*****@example.fr");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("555-123-4567"), "***-***-4567");
        assert_eq!(mask_phone("555.123.4567"), "***-***-4567");
        assert_eq!(mask_phone("(555) 123 45-67"), "***-***-5-67");
    }

    #[test]
    fn test_mask_phone_short_values() {
        assert_eq!(mask_phone("123"), "***-***-123");
        assert_eq!(mask_phone(""), "***-***-");
    }

    #[test]
    fn test_label_dispatch_masks_by_detection() {
        let mut t = table(
            &["contact", "reach"],
            &[&["a@example.com", "555-123-4567"], &["", "555 000 1111"]],
        );
        let columns = flagged(&[
            ("contact", 0, SensitiveDataType::Email),
            ("reach", 1, SensitiveDataType::Phone),
        ]);

        let summary = Anonymizer::new(MaskDispatch::Label).mask_columns(&mut t, &columns);

        assert_eq!(summary.masked, vec!["contact", "reach"]);
        assert!(summary.skipped.is_empty());
        assert_eq!(
            t.column_values(0).collect::<Vec<_>>(),
            vec![Some("*****@example.com"), None]
        );
        assert_eq!(
            t.column_values(1).collect::<Vec<_>>(),
            vec![Some("***-***-4567"), Some("***-***-1111")]
        );
    }

    #[test]
    fn test_mixed_column_uses_its_label_for_every_value() {
        let mut t = table(&["contact"], &[&["n/a"], &["ann@example.com"], &["555-123-4567"]]);
        let columns = flagged(&[("contact", 0, SensitiveDataType::Email)]);

        Anonymizer::default().mask_columns(&mut t, &columns);

        assert_eq!(
            t.column_values(0).collect::<Vec<_>>(),
            vec![Some("*****"), Some("a*****@example.com"), Some("*****")]
        );
    }

    #[test]
    fn test_column_name_dispatch_skips_unnamed_columns() {
        let mut t = table(&["contact", "phone_number"], &[&["555-123-4567", "555-123-4567"]]);
        let columns = flagged(&[
            ("contact", 0, SensitiveDataType::Phone),
            ("phone_number", 1, SensitiveDataType::Phone),
        ]);

        let summary = Anonymizer::new(MaskDispatch::ColumnName).mask_columns(&mut t, &columns);

        assert_eq!(summary.masked, vec!["phone_number"]);
        assert_eq!(summary.skipped, vec!["contact"]);
        assert_eq!(t.column_values(0).next().unwrap(), Some("555-123-4567"));
        assert_eq!(t.column_values(1).next().unwrap(), Some("***-***-4567"));
    }

    #[test]
    fn test_column_name_dispatch_prefers_email() {
        let anonymizer = Anonymizer::new(MaskDispatch::ColumnName);
        let column = DetectedColumn {
            name: "email_or_phone".into(),
            index: 0,
            data_type: SensitiveDataType::Phone,
        };
        assert_eq!(anonymizer.transform_for(&column), Some(SensitiveDataType::Email));
    }

    #[test]
    fn test_unflagged_columns_untouched() {
        let mut t = table(&["notes", "email"], &[&["hi", "x@example.com"]]);
        let columns = flagged(&[("email", 1, SensitiveDataType::Email)]);

        Anonymizer::default().mask_columns(&mut t, &columns);

        assert_eq!(t.column_values(0).next().unwrap(), Some("hi"));
        assert_eq!(t.column_values(1).next().unwrap(), Some("x*****@example.com"));
    }
}
