use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dataset::DEFAULT_DELIMITER;
use crate::error::{GuardError, Result};
use crate::utils::anonymizer::MaskDispatch;

/// Default input dataset path.
pub const DEFAULT_INPUT: &str = "your_dataset.csv";

/// Default sanitized output path.
pub const DEFAULT_OUTPUT: &str = "masked_data.csv";

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "privacy_guard";

/// Prefix for environment overrides, e.g. `PRIVACY_GUARD_INPUT`.
pub const ENV_PREFIX: &str = "PRIVACY_GUARD";

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Dataset to scan
    pub input: PathBuf,

    /// Where the sanitized copy is written
    pub output: PathBuf,

    /// Field delimiter for both input and output
    pub delimiter: char,

    /// How flagged columns choose their mask
    pub dispatch: MaskDispatch,

    /// Directory for log files; stderr when unset
    pub log_dir: Option<PathBuf>,

    /// Detect only, write nothing
    pub dry_run: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: DEFAULT_DELIMITER as char,
            dispatch: MaskDispatch::default(),
            log_dir: None,
            dry_run: false,
        }
    }
}

impl GuardConfig {
    /// Layers built-in defaults, a settings file and `PRIVACY_GUARD_*` variables.
    ///
    /// An explicit `file` must exist; otherwise `privacy_guard.{toml,json,...}`
    /// in the working directory is read if present.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(file, None)
    }

    /// Like [`GuardConfig::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(file: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let file_source = match file {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = ::config::Config::builder()
            .add_source(file_source)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?;

        let config: GuardConfig = settings.try_deserialize()?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// The delimiter as the single byte the CSV reader and writer expect.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() && !matches!(self.delimiter, '"' | '\n' | '\r') {
            Ok(self.delimiter as u8)
        } else {
            Err(GuardError::Config(format!(
                "delimiter must be a single ASCII character other than a quote or newline, got {:?}",
                self.delimiter
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.input, PathBuf::from("your_dataset.csv"));
        assert_eq!(config.output, PathBuf::from("masked_data.csv"));
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert_eq!(config.dispatch, MaskDispatch::Label);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guard.toml");
        fs::write(
            &path,
            "input = \"people.csv\"\ndelimiter = \";\"\ndispatch = \"column-name\"\n",
        )
        .unwrap();

        let config = GuardConfig::load_with_env(Some(&path), Some(HashMap::new())).unwrap();

        assert_eq!(config.input, PathBuf::from("people.csv"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.dispatch, MaskDispatch::ColumnName);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guard.toml");
        fs::write(&path, "input = \"people.csv\"\noutput = \"from_file.csv\"\n").unwrap();
        let env = HashMap::from([
            ("PRIVACY_GUARD_OUTPUT".to_string(), "from_env.csv".to_string()),
            ("PRIVACY_GUARD_DRY_RUN".to_string(), "true".to_string()),
        ]);

        let config = GuardConfig::load_with_env(Some(&path), Some(env)).unwrap();

        assert_eq!(config.input, PathBuf::from("people.csv"));
        assert_eq!(config.output, PathBuf::from("from_env.csv"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = GuardConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, GuardError::Config(_)));
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let config = GuardConfig {
            delimiter: '§',
            ..GuardConfig::default()
        };
        assert!(matches!(config.delimiter_byte(), Err(GuardError::Config(_))));
    }
}
