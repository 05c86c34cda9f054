use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use suna_model::LineIssue;

#[derive(Debug, Serialize)]
pub struct DecodeSummary {
    pub log: PathBuf,
    pub output: Option<PathBuf>,
    pub lines_read: usize,
    pub records: usize,
    pub malformed_lines: usize,
    pub batches: usize,
    /// Records written per stream name.
    pub streams: BTreeMap<&'static str, usize>,
    pub issues: Vec<LineIssue>,
}

/// Process exit code when `--strict` finds skipped lines or field issues.
pub const EXIT_DEGRADED: i32 = 2;

impl DecodeSummary {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// True when every line became a record and every field decoded.
    pub fn is_clean(&self) -> bool {
        self.malformed_lines == 0 && !self.has_issues()
    }

    /// Exit code for a finished decode. Only strict runs fail on damage.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.is_clean() {
            EXIT_DEGRADED
        } else {
            0
        }
    }
}
