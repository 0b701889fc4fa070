//! Error types for GEDCOM ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a GEDCOM source.
///
/// Malformed lines are not errors: they are skipped by the assembler. Only
/// failing to open or read the source aborts ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// GEDCOM file does not exist.
    #[error("GEDCOM file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
