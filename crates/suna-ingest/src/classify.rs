//! Line classification and field reshaping.
//!
//! A SUNA line reaches us in one of two framings:
//!
//! - **DCL relayed**: `2014/08/10 00:00:14.505 SATSLF0345,2014221,23.99,...`
//!   The logger prepends its own date and time.
//! - **Instrument recovered**: `SATSLF0345,2014221,23.99,...`
//!   Read straight from the instrument, no prefix.
//!
//! Both are split into comma fields, after which the serial sub-code hidden
//! in the frame marker (`SATSLF0345` → `SAT` + `SLF`) becomes its own field.

use suna_model::{FrameVariant, RAW_FIELD_COUNT};

use crate::error::LineRejection;

/// Light frame marker; also the marker the logger framing is recognized by.
pub const PRIMARY_FRAME_MARKER: &str = "SATSLF";

/// Second marker that identifies logger-relayed lines.
pub const LOGGER_FRAME_MARKER: &str = "SATNDF";

/// Dark frame marker, accepted on instrument-recovered lines.
pub const DARK_FRAME_MARKER: &str = "SATSDF";

const DELIMITER: char = ',';
const MARKER_WIDTH: usize = 3;
const SUB_CODE_END: usize = 6;

/// Logger date and time fields of a DCL line, still as raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerStamp<'a> {
    /// `YYYYDDD`
    pub date: &'a str,
    /// Decimal hours.
    pub time: &'a str,
}

/// A classified line split into reshaped fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFields<'a> {
    pub variant: FrameVariant,
    /// Raw field count plus one: the frame marker is split in two.
    pub fields: Vec<&'a str>,
    /// Present for [`FrameVariant::DclRelayed`] only.
    pub logger_stamp: Option<LoggerStamp<'a>>,
}

/// Determine the framing of `line` from its markers.
///
/// A line that contains the primary marker somewhere other than at its very
/// start, or that contains the logger marker anywhere, was relayed by the
/// logger. Otherwise a line starting with the primary or dark marker came off
/// the instrument.
pub fn classify_line(line: &str) -> Option<FrameVariant> {
    let relayed = (!line.starts_with(PRIMARY_FRAME_MARKER) && line.contains(PRIMARY_FRAME_MARKER))
        || line.contains(LOGGER_FRAME_MARKER);

    if relayed {
        Some(FrameVariant::DclRelayed)
    } else if line.starts_with(PRIMARY_FRAME_MARKER) || line.starts_with(DARK_FRAME_MARKER) {
        Some(FrameVariant::InstrumentRecovered)
    } else {
        None
    }
}

/// Validate, classify and reshape one line.
///
/// The field count is checked on the line as received, prefix included.
///
/// # Errors
///
/// Returns the [`LineRejection`] explaining why the line yields no record.
pub fn split_frame(line: &str) -> Result<FrameFields<'_>, LineRejection> {
    let line = line.trim_end_matches(['\r', '\n']);

    let found = line.split(DELIMITER).count();
    if found != RAW_FIELD_COUNT {
        return Err(LineRejection::FieldCount {
            expected: RAW_FIELD_COUNT,
            found,
        });
    }

    let variant = classify_line(line).ok_or(LineRejection::NoFrameMarker)?;

    let (payload, logger_stamp) = match variant {
        FrameVariant::DclRelayed => {
            let payload = strip_logger_prefix(line).ok_or(LineRejection::MissingLoggerPrefix)?;
            let mut stamp_fields = payload.split(DELIMITER).skip(1);
            let stamp = match (stamp_fields.next(), stamp_fields.next()) {
                (Some(date), Some(time)) => LoggerStamp { date, time },
                _ => return Err(LineRejection::MissingLoggerPrefix),
            };
            (payload, Some(stamp))
        }
        FrameVariant::InstrumentRecovered => (line, None),
    };

    Ok(FrameFields {
        variant,
        fields: reshape_fields(payload),
        logger_stamp,
    })
}

/// Drop the leading `date time ` of a logger line.
fn strip_logger_prefix(line: &str) -> Option<&str> {
    line.splitn(3, char::is_whitespace).nth(2)
}

/// Split on commas and move the sub-code out of the frame marker.
fn reshape_fields(payload: &str) -> Vec<&str> {
    let mut raw = payload.split(DELIMITER);
    let mut fields = Vec::with_capacity(RAW_FIELD_COUNT + 1);

    if let Some(first) = raw.next() {
        fields.push(char_slice(first, 0, MARKER_WIDTH));
        fields.push(char_slice(first, MARKER_WIDTH, SUB_CODE_END));
    }
    fields.extend(raw);
    fields
}

/// Characters `[start, end)` of `s`, clamped to its length.
pub(crate) fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx);
    let begin = byte_at(start);
    let finish = byte_at(end.max(start));
    &s[begin..finish]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(first: &str, total: usize) -> String {
        let mut fields = vec![first.to_string()];
        fields.extend((1..total).map(|i| i.to_string()));
        fields.join(",")
    }

    #[test]
    fn classifies_logger_lines() {
        assert_eq!(
            classify_line("2014/08/10 00:00:14.505 SATSLF0345,1"),
            Some(FrameVariant::DclRelayed)
        );
        assert_eq!(
            classify_line("2014/08/10 00:00:14.505 SATNDF0345,1"),
            Some(FrameVariant::DclRelayed)
        );
    }

    #[test]
    fn classifies_instrument_lines() {
        assert_eq!(
            classify_line("SATSLF0345,1"),
            Some(FrameVariant::InstrumentRecovered)
        );
        assert_eq!(
            classify_line("SATSDF0345,1"),
            Some(FrameVariant::InstrumentRecovered)
        );
    }

    #[test]
    fn logger_marker_wins_over_instrument_prefix() {
        assert_eq!(
            classify_line("SATSDF0345,SATNDF"),
            Some(FrameVariant::DclRelayed)
        );
    }

    #[test]
    fn unknown_lines_are_unclassified() {
        assert_eq!(classify_line("2014/08/10 00:00:14.505 SATSDF0345,1"), None);
        assert_eq!(classify_line("CTD,1,2,3"), None);
        assert_eq!(classify_line(""), None);
    }

    #[test]
    fn reshapes_instrument_frame() {
        let line = line_with("SATSLF0345", RAW_FIELD_COUNT);
        let frame = split_frame(&line).unwrap();

        assert_eq!(frame.variant, FrameVariant::InstrumentRecovered);
        assert_eq!(frame.fields.len(), RAW_FIELD_COUNT + 1);
        assert_eq!(&frame.fields[..4], &["SAT", "SLF", "1", "2"]);
        assert!(frame.logger_stamp.is_none());
    }

    #[test]
    fn strips_logger_prefix_and_reads_stamp() {
        let payload = line_with("SATSLF0345", RAW_FIELD_COUNT);
        let line = format!("2014/08/10 00:00:14.505 {payload}");
        let frame = split_frame(&line).unwrap();

        assert_eq!(frame.variant, FrameVariant::DclRelayed);
        assert_eq!(&frame.fields[..3], &["SAT", "SLF", "1"]);
        assert_eq!(
            frame.logger_stamp,
            Some(LoggerStamp {
                date: "1",
                time: "2"
            })
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        let line = line_with("SATSLF0345", RAW_FIELD_COUNT - 1);
        assert_eq!(
            split_frame(&line),
            Err(LineRejection::FieldCount {
                expected: RAW_FIELD_COUNT,
                found: RAW_FIELD_COUNT - 1
            })
        );
    }

    #[test]
    fn rejects_unmarked_line() {
        let line = line_with("CTDBP01", RAW_FIELD_COUNT);
        assert_eq!(split_frame(&line), Err(LineRejection::NoFrameMarker));
    }

    #[test]
    fn rejects_logger_line_without_prefix() {
        let line = line_with("SATNDF0345", RAW_FIELD_COUNT);
        assert_eq!(split_frame(&line), Err(LineRejection::MissingLoggerPrefix));
    }

    #[test]
    fn ignores_trailing_line_terminator() {
        let line = format!("{}\r\n", line_with("SATSDF0345", RAW_FIELD_COUNT));
        let frame = split_frame(&line).unwrap();
        assert_eq!(frame.fields.last(), Some(&"285"));
    }

    #[test]
    fn short_marker_is_clamped() {
        assert_eq!(reshape_fields("SA,1"), vec!["SA", "", "1"]);
        assert_eq!(char_slice("SATSLF0345", 3, 6), "SLF");
        assert_eq!(char_slice("ÄÖÜSLF", 3, 6), "SLF");
        assert_eq!(char_slice("abc", 5, 9), "");
    }
}
