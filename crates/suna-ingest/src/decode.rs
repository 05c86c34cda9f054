//! Mapping reshaped fields onto the SUNA layout.

use suna_model::{
    DecodeIssue, DecodedField, DecodedRecord, FieldKind, FieldSpec, FieldValue,
    SPECTRAL_CHANNEL_COUNT, SPECTRAL_SLOT, SUNA_LAYOUT, field_spec,
};

use crate::classify::{LoggerStamp, split_frame};
use crate::error::LineRejection;
use crate::timestamp::derive_timestamp;

/// Decode one raw line, or `None` if it is not a usable SUNA frame.
///
/// Field-level problems are appended to `issues`; they never drop the record.
pub fn decode_line(line: &str, issues: &mut Vec<DecodeIssue>) -> Option<DecodedRecord> {
    decode_frame(line, issues).ok()
}

/// Like [`decode_line`], but says why a line was rejected.
///
/// # Errors
///
/// Returns a [`LineRejection`] for lines with the wrong field count, no
/// frame marker, or a logger line without its date/time prefix.
pub fn decode_frame(
    line: &str,
    issues: &mut Vec<DecodeIssue>,
) -> Result<DecodedRecord, LineRejection> {
    let frame = split_frame(line)?;

    let internal_timestamp = frame
        .logger_stamp
        .and_then(|stamp| logger_timestamp(stamp, issues));
    let values = map_fields(&frame.fields, issues);

    Ok(DecodedRecord::new(frame.variant, internal_timestamp, values))
}

fn logger_timestamp(stamp: LoggerStamp<'_>, issues: &mut Vec<DecodeIssue>) -> Option<f64> {
    match derive_timestamp(stamp.date, stamp.time) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            issues.push(DecodeIssue::Timestamp {
                date: stamp.date.to_string(),
                time: stamp.time.to_string(),
                reason: err.to_string(),
            });
            None
        }
    }
}

/// Assign reshaped fields to layout slots.
///
/// Fields `12..268` always form the spectral block and always fill the
/// spectral slot. Elsewhere, empty fields (the unused CTD columns) are
/// skipped without consuming a slot. One running slot position is kept
/// across head, block and tail, so an empty head field shifts every name
/// after it, the tail included.
fn map_fields(fields: &[&str], issues: &mut Vec<DecodeIssue>) -> Vec<DecodedField> {
    let (head, rest) = fields.split_at(SPECTRAL_SLOT.min(fields.len()));
    let (block, tail) = rest.split_at(SPECTRAL_CHANNEL_COUNT.min(rest.len()));

    let mut values = Vec::with_capacity(SUNA_LAYOUT.len());

    let position = map_scalars(head, 0, &mut values, issues);
    values.push(decode_spectral(&SUNA_LAYOUT[SPECTRAL_SLOT], block, issues));
    map_scalars(tail, position + 1, &mut values, issues);

    values
}

/// Map non-empty `raw_fields` onto consecutive slots from `position`.
/// Returns the position after the last slot used.
fn map_scalars(
    raw_fields: &[&str],
    mut position: usize,
    values: &mut Vec<DecodedField>,
    issues: &mut Vec<DecodeIssue>,
) -> usize {
    for raw in raw_fields.iter().filter(|raw| !raw.is_empty()) {
        let Some(spec) = field_spec(position) else {
            issues.push(DecodeIssue::ExtraField {
                raw: (*raw).to_string(),
            });
            continue;
        };
        position += 1;

        let value = match decode_scalar(spec.kind, raw) {
            Some(value) => Some(value),
            None => {
                issues.push(DecodeIssue::Field {
                    field: spec.name,
                    raw: (*raw).to_string(),
                    expected: spec.kind,
                });
                None
            }
        };
        values.push(DecodedField::new(spec.name, value));
    }
    position
}

fn decode_scalar(kind: FieldKind, raw: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Str => Some(FieldValue::Str(raw.to_string())),
        // a shifted scalar landing on the spectral slot decodes as one channel
        FieldKind::Int | FieldKind::IntArray => parse_int(raw).map(FieldValue::Int),
        FieldKind::Float => raw.trim().parse().ok().map(FieldValue::Float),
    }
}

fn decode_spectral(
    spec: &FieldSpec,
    block: &[&str],
    issues: &mut Vec<DecodeIssue>,
) -> DecodedField {
    let channels = (0..SPECTRAL_CHANNEL_COUNT)
        .map(|index| {
            let raw = block.get(index).copied().unwrap_or_default();
            let count = parse_int(raw);
            if count.is_none() {
                issues.push(DecodeIssue::SpectralElement {
                    field: spec.name,
                    index,
                    raw: raw.to_string(),
                });
            }
            count
        })
        .collect();

    DecodedField::new(spec.name, Some(FieldValue::IntArray(channels)))
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
