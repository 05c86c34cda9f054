//! Reading SUNA log files into lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum log file size accepted by [`read_log_lines`] (256 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_LOG_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject files that start with a UTF-16 byte-order mark.
///
/// Instrument and logger files are plain ASCII; a UTF-8 BOM is tolerated.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads every line of a log file.
///
/// Line terminators (`\n` or `\r\n`) are removed. Bytes that are not valid
/// UTF-8 are replaced rather than failing the file, so a corrupted line only
/// costs that line.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for chunk in reader.split(b'\n') {
        let bytes = chunk.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let decoded = String::from_utf8_lossy(&bytes);
        let text = decoded.strip_suffix('\r').unwrap_or(&decoded);
        // Skip BOM if present
        let cleaned = if lines.is_empty() {
            text.strip_prefix('\u{feff}').unwrap_or(text)
        } else {
            text
        };
        lines.push(cleaned.to_string());
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "read log file");
    Ok(lines)
}
