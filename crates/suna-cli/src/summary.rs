use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use suna_cli::types::DecodeSummary;
use suna_model::DecodeIssue;

/// Issue rows shown before the table is cut off.
const MAX_ISSUE_ROWS: usize = 50;

pub fn print_summary(summary: &DecodeSummary) {
    eprintln!("Log: {}", summary.log.display());
    if let Some(path) = &summary.output {
        eprintln!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stream"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (stream, count) in &summary.streams {
        table.add_row(vec![Cell::new(stream), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![dim_cell("lines read"), dim_cell(summary.lines_read)]);
    table.add_row(vec![
        dim_cell("malformed lines"),
        count_cell(summary.malformed_lines, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("field issues"),
        count_cell(summary.issues.len(), Color::Red),
    ]);
    eprintln!("{table}");

    print_issue_table(summary);
}

fn print_issue_table(summary: &DecodeSummary) {
    if summary.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Kind"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for line_issue in summary.issues.iter().take(MAX_ISSUE_ROWS) {
        let issue = &line_issue.issue;
        table.add_row(vec![
            Cell::new(line_issue.line),
            kind_cell(issue),
            match issue.field() {
                Some(field) => Cell::new(field),
                None => dim_cell("-"),
            },
            Cell::new(issue.to_string()),
        ]);
    }
    eprintln!();
    eprintln!("Issues:");
    eprintln!("{table}");
    let hidden = summary.issues.len().saturating_sub(MAX_ISSUE_ROWS);
    if hidden > 0 {
        eprintln!("... and {hidden} more (use --report for the full list)");
    }
}

fn kind_cell(issue: &DecodeIssue) -> Cell {
    let label = match issue {
        DecodeIssue::Field { .. } => "field",
        DecodeIssue::SpectralElement { .. } => "spectral",
        DecodeIssue::Timestamp { .. } => "timestamp",
        DecodeIssue::ExtraField { .. } => "extra",
    };
    Cell::new(label).fg(Color::Yellow)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
