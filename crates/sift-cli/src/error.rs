//! Errors raised by the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::OutputMode;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported catalog format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("output mode {0:?} is not a structured format")]
    NotStructured(OutputMode),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error(transparent)]
    Sift(#[from] sift::SiftError),
}
