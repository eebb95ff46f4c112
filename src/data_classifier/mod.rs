//! Column-level PII detection over a [`crate::dataset::Table`].

pub mod detector;
pub mod patterns;

pub use detector::detect_sensitive_columns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitiveDataType {
    Email,
    Phone,
}

impl SensitiveDataType {
    pub const fn label(&self) -> &'static str {
        match self {
            SensitiveDataType::Email => "email",
            SensitiveDataType::Phone => "phone",
        }
    }
}

impl std::fmt::Display for SensitiveDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A column flagged by detection, with the label of the pattern that hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumn {
    pub name: String,
    pub index: usize,
    pub data_type: SensitiveDataType,
}

/// Flagged columns in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensitiveColumns {
    columns: Vec<DetectedColumn>,
}

impl SensitiveColumns {
    pub fn push(&mut self, column: DetectedColumn) {
        self.columns.push(column);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetectedColumn> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DetectedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SensitiveColumns {
    type Item = &'a DetectedColumn;
    type IntoIter = std::slice::Iter<'a, DetectedColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
