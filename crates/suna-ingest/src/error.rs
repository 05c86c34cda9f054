//! Error types for SUNA log ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a log file from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Log file not found.
    #[error("log file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size cap.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File starts with a byte-order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl IngestError {
    /// Map an `open`/`metadata` failure, keeping not-found distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Why a line produced no record. Rejected lines are expected noise in
/// field logs and are skipped, not reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejection {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("no recognized frame marker")]
    NoFrameMarker,

    #[error("logger line has no date/time prefix")]
    MissingLoggerPrefix,
}

/// Errors from [`derive_timestamp`](crate::derive_timestamp).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    #[error("date '{0}' is not in YYYYDDD form")]
    InvalidDate(String),

    #[error("time '{0}' is not a decimal hour value")]
    InvalidTime(String),

    #[error("date '{date}' plus {hours} hours is outside the supported calendar range")]
    OutOfRange { date: String, hours: f64 },
}
