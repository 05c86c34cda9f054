//! Recoverable problems found while decoding a line.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::layout::FieldKind;

/// A field-level problem. The record it belongs to is still produced.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeIssue {
    /// A scalar could not be converted to its declared kind.
    #[error("cannot decode {field} from '{raw}' as {expected}")]
    Field {
        field: &'static str,
        raw: String,
        expected: FieldKind,
    },

    /// One spectral channel count is not an integer.
    #[error("cannot decode {field}[{index}] from '{raw}' as integer")]
    SpectralElement {
        field: &'static str,
        index: usize,
        raw: String,
    },

    /// The logger date/time fields do not form a valid timestamp.
    #[error("cannot derive timestamp from date '{date}' and time '{time}': {reason}")]
    Timestamp {
        date: String,
        time: String,
        reason: String,
    },

    /// A non-empty field left over after every layout slot was filled.
    #[error("unexpected field '{raw}' after the last layout slot")]
    ExtraField { raw: String },
}

impl DecodeIssue {
    /// Layout slot the issue refers to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeIssue::Field { field, .. } | DecodeIssue::SpectralElement { field, .. } => {
                Some(field)
            }
            DecodeIssue::Timestamp { .. } | DecodeIssue::ExtraField { .. } => None,
        }
    }
}

/// A [`DecodeIssue`] tagged with the 1-based input line it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineIssue {
    pub line: usize,
    #[serde(flatten)]
    pub issue: DecodeIssue,
}

impl LineIssue {
    pub fn new(line: usize, issue: DecodeIssue) -> Self {
        Self { line, issue }
    }
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.issue)
    }
}
