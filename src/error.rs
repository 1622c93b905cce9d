//! Error types for the resume pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a run. Each one is logged before it is returned.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The PDF could not be opened or decoded
    #[error("Failed to read PDF file {path:?}: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The JSON output could not be written
    #[error("Failed to write JSON file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The summary could not be written to the console
    #[error("Failed to print resume summary: {0}")]
    Console(#[source] std::io::Error),

    /// A config file exists but could not be read or parsed
    #[error("Failed to load config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ResumeError {
    pub fn extraction(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::Extraction {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;
