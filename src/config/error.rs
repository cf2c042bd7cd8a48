//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An expiration variable could not be parsed as whole seconds.
    #[error("failed to parse {name}='{value}': {source}")]
    DurationParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// An expiration was configured as zero seconds.
    #[error("{name} must be greater than zero")]
    ZeroExpiration { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scoring file is not valid JSON for [`super::ScoringConfig`].
    #[error("failed to parse scoring tables in {path}: {source}")]
    ScoringParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid score {value} for '{domain}' in {table}")]
    InvalidDomainScore {
        table: &'static str,
        domain: String,
        value: f32,
    },

    #[error("invalid weight {value} for factor '{factor}': must be finite and non-negative")]
    InvalidWeight { factor: &'static str, value: f32 },

    #[error("at least one scoring weight must be positive")]
    AllWeightsZero,
}
