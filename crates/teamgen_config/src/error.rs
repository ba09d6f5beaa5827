//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur while provisioning or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing and so is the template.
    #[error("config template {path} not found")]
    TemplateMissing { path: PathBuf },

    /// Cloning the template into place failed.
    #[error("failed to copy config template {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or deserializing the layered configuration failed.
    #[error("invalid config: {0}")]
    Invalid(#[from] config::ConfigError),
}
