//! Streaming decoder over a finite sequence of log lines.
//!
//! # Usage
//!
//! ```ignore
//! use suna_ingest::SunaParser;
//!
//! let mut issues = Vec::new();
//! let mut parser = SunaParser::new(lines, |issue| issues.push(issue));
//! let first = parser.get_records(100);
//! ```
//!
//! The whole source is decoded on the first [`SunaParser::get_records`] call;
//! later calls only drain the buffer.

use std::collections::VecDeque;

use suna_model::{DecodedRecord, LineIssue};

use crate::decode::decode_frame;

/// Counters collected while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines pulled from the source.
    pub lines_read: usize,
    /// Records produced (including ones already handed out).
    pub records: usize,
    /// Lines that produced no record.
    pub malformed_lines: usize,
    /// Field-level issues reported through the callback.
    pub issues: usize,
}

/// Decodes SUNA lines into a FIFO buffer of records.
///
/// `on_issue` receives every field-level problem with its 1-based line
/// number. Rejected lines are skipped silently (logged at debug level).
pub struct SunaParser<I, F> {
    /// `None` once the source has been consumed.
    source: Option<I>,
    buffer: VecDeque<DecodedRecord>,
    on_issue: F,
    stats: ParseStats,
}

impl<I> SunaParser<I, fn(LineIssue)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    /// Parser that only logs field issues.
    pub fn without_callback(lines: I) -> Self {
        Self::new(lines, |_| {})
    }
}

impl<I, F> SunaParser<I, F>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(LineIssue),
{
    pub fn new(lines: I, on_issue: F) -> Self {
        Self {
            source: Some(lines),
            buffer: VecDeque::new(),
            on_issue,
            stats: ParseStats::default(),
        }
    }

    /// True once the source has been consumed.
    pub fn is_parsed(&self) -> bool {
        self.source.is_none()
    }

    /// Decode the whole source into the buffer. No-op after the first call.
    pub fn parse_all(&mut self) {
        let Some(lines) = self.source.take() else {
            return;
        };

        let span = tracing::debug_span!("parse_suna_lines");
        let _guard = span.enter();

        let mut issues = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            self.stats.lines_read += 1;

            match decode_frame(line.as_ref(), &mut issues) {
                Ok(record) => {
                    self.stats.records += 1;
                    self.buffer.push_back(record);
                }
                Err(rejection) => {
                    self.stats.malformed_lines += 1;
                    tracing::debug!(line = line_number, %rejection, "skipping line");
                }
            }

            for issue in issues.drain(..) {
                self.stats.issues += 1;
                tracing::warn!(line = line_number, %issue, "field decode failed");
                (self.on_issue)(LineIssue::new(line_number, issue));
            }
        }

        tracing::info!(
            lines = self.stats.lines_read,
            records = self.stats.records,
            malformed = self.stats.malformed_lines,
            issues = self.stats.issues,
            "parsed SUNA lines"
        );
    }

    /// Remove and return up to `count` records in input order.
    ///
    /// Parses the source on first use. Returns fewer records (possibly none)
    /// once the buffer runs dry; `count == 0` returns an empty batch without
    /// touching the source.
    pub fn get_records(&mut self, count: usize) -> Vec<DecodedRecord> {
        if count == 0 {
            return Vec::new();
        }

        self.parse_all();

        let take = count.min(self.buffer.len());
        self.buffer.drain(..take).collect()
    }

    /// Records decoded but not yet handed out.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suna_model::{FrameVariant, RAW_FIELD_COUNT};

    fn instrument_line(serial: usize) -> String {
        let mut fields = vec![format!("SATSLF{serial:04}")];
        // raw columns 281..285 are the unused CTD fields
        fields.extend((1..RAW_FIELD_COUNT).map(|i| {
            if (281..285).contains(&i) {
                String::new()
            } else {
                i.to_string()
            }
        }));
        fields.join(",")
    }

    #[test]
    fn zero_count_does_not_parse() {
        let mut parser = SunaParser::without_callback(vec![instrument_line(1)]);

        assert!(parser.get_records(0).is_empty());
        assert!(!parser.is_parsed());
        assert_eq!(parser.stats(), ParseStats::default());
    }

    #[test]
    fn first_request_parses_everything() {
        let lines = vec![instrument_line(1), "garbage".to_string(), instrument_line(2)];
        let mut parser = SunaParser::without_callback(lines);

        let batch = parser.get_records(1);
        assert_eq!(batch.len(), 1);
        assert!(parser.is_parsed());
        assert_eq!(parser.remaining(), 1);
        assert_eq!(
            parser.stats(),
            ParseStats {
                lines_read: 3,
                records: 2,
                malformed_lines: 1,
                issues: 0,
            }
        );
        assert_eq!(batch[0].variant, FrameVariant::InstrumentRecovered);
    }

    #[test]
    fn parse_all_is_idempotent() {
        let mut parser = SunaParser::without_callback(vec![instrument_line(1)]);
        parser.parse_all();
        parser.parse_all();

        assert_eq!(parser.stats().lines_read, 1);
        assert_eq!(parser.get_records(10).len(), 1);
        assert!(parser.get_records(10).is_empty());
    }

    #[test]
    fn issues_reach_the_callback_with_line_numbers() {
        let mut bad = instrument_line(3);
        bad = bad.replacen(",1,", ",2014x21,", 1);
        let lines = vec![instrument_line(1), bad];

        let mut seen = Vec::new();
        let mut parser = SunaParser::new(lines, |issue| seen.push(issue));
        let records = parser.get_records(5);
        let stats = parser.stats();
        drop(parser);

        assert_eq!(records.len(), 2);
        assert_eq!(stats.issues, 1);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].line, 2);
        assert_eq!(seen[0].issue.field(), Some("date_of_sample"));
    }
}
