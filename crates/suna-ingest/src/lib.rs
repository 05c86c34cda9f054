//! SUNA log ingestion.
//!
//! This crate turns raw ASCII log lines from a SUNA nitrate sensor into
//! [`DecodedRecord`](suna_model::DecodedRecord)s.
//!
//! # Features
//!
//! - **Classification**: Tell logger-relayed (DCL) lines from instrument-recovered ones
//! - **Reshaping**: Split the serial sub-code out of the frame marker and collapse the
//!   256 spectral channels into one field
//! - **Timestamps**: Derive NTP timestamps from the `YYYYDDD` + decimal-hour fields
//! - **Streaming**: Buffer decoded records and hand them out in bounded batches
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use suna_ingest::{SunaParser, read_log_lines};
//!
//! let lines = read_log_lines(Path::new("data/suna_20140810.log"))?;
//! let mut parser = SunaParser::new(lines, |issue| eprintln!("{issue}"));
//!
//! loop {
//!     let batch = parser.get_records(100);
//!     if batch.is_empty() {
//!         break;
//!     }
//!     // hand the batch downstream
//! }
//! ```

mod classify;
mod decode;
mod error;
mod parser;
mod source;
mod timestamp;

// === Error Types ===
pub use error::{IngestError, LineRejection, Result, TimestampError};

// === Classification ===
pub use classify::{
    DARK_FRAME_MARKER, FrameFields, LOGGER_FRAME_MARKER, LoggerStamp, PRIMARY_FRAME_MARKER,
    classify_line, split_frame,
};

// === Decoding ===
pub use decode::{decode_frame, decode_line};
pub use parser::{ParseStats, SunaParser};
pub use timestamp::{NTP_UNIX_OFFSET_SECONDS, derive_timestamp, unix_to_ntp};

// === Log Files ===
pub use source::{
    MAX_LOG_FILE_SIZE, check_file_size, check_file_size_with_limit, read_log_lines,
    validate_encoding,
};
