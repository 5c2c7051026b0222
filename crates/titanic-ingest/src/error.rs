//! Error types for passenger data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use titanic_model::ParseError;

/// Errors that can occur while reading and parsing the input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input argument is not an existing regular file.
    #[error("invalid input file: {path}")]
    InvalidInputPath { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line could not be parsed into a record.
    #[error("{path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
