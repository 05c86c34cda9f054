use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::info;

use suna_cli::decode::decode_log;
use suna_cli::types::DecodeSummary;
use suna_model::SUNA_LAYOUT;

use crate::cli::DecodeArgs;
use crate::summary::{align_column, apply_table_style};

pub fn run_layout() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Slot", "Field", "Type"]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (slot, spec) in SUNA_LAYOUT.iter().enumerate() {
        table.add_row(vec![slot.to_string(), spec.name.to_string(), spec.kind.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<DecodeSummary> {
    let batch_size = args.batch_size;
    let summary = match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let mut summary = decode_log(&args.log, batch_size, &mut out)?;
            summary.output = Some(path.clone());
            summary
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            decode_log(&args.log, batch_size, &mut out)?
        }
    };

    if let Some(path) = &args.report {
        write_report(&summary, path)?;
        info!(report = %path.display(), "wrote decode report");
    }
    Ok(summary)
}

fn write_report(summary: &DecodeSummary, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("write {}", path.display()))?;
    writer.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
