//! Detects email and phone columns in a delimited dataset and writes a masked copy.

pub mod config;
pub mod data_classifier;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod utils;

pub use config::GuardConfig;
pub use error::{GuardError, Result};
pub use pipeline::{run, RunReport};
