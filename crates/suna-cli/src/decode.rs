//! Decoding a log file to JSON lines.

use std::collections::BTreeMap;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use suna_ingest::{SunaParser, read_log_lines};

use crate::types::DecodeSummary;

/// Records requested from the parser per batch unless overridden.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(size) => size,
    None => unreachable!(),
};

/// Decode `log` and write one JSON record per line to `out`.
///
/// Records are pulled from the parser `batch_size` at a time until it runs
/// dry. Field-level issues are collected into the returned summary.
pub fn decode_log<W: Write>(
    log: &Path,
    batch_size: NonZeroUsize,
    out: &mut W,
) -> Result<DecodeSummary> {
    let span = info_span!("decode", log = %log.display());
    let _guard = span.enter();

    let lines = read_log_lines(log).with_context(|| format!("read {}", log.display()))?;

    let mut issues = Vec::new();
    let mut parser = SunaParser::new(lines, |issue| issues.push(issue));
    let mut streams = BTreeMap::new();
    let mut batches = 0usize;

    loop {
        let batch = parser.get_records(batch_size.get());
        if batch.is_empty() {
            break;
        }
        batches += 1;
        for record in &batch {
            *streams.entry(record.particle_type()).or_insert(0usize) += 1;
            serde_json::to_writer(&mut *out, record).context("serialize record")?;
            writeln!(out).context("write record")?;
        }
        debug!(batch = batches, records = batch.len(), "wrote batch");
    }
    out.flush().context("flush output")?;

    let stats = parser.stats();
    drop(parser);

    info!(
        records = stats.records,
        malformed = stats.malformed_lines,
        issues = issues.len(),
        "decoded log"
    );

    Ok(DecodeSummary {
        log: log.to_path_buf(),
        output: None,
        lines_read: stats.lines_read,
        records: stats.records,
        malformed_lines: stats.malformed_lines,
        batches,
        streams,
        issues,
    })
}
