use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mailmerge_cli::types::{FieldRow, GenerateResult};
use mailmerge_model::{RecordOutcome, RecordStatus};

pub fn print_summary(result: &GenerateResult) {
    let report = &result.report;
    if result.dry_run {
        println!("Dry run: nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if let Some(path) = &report.combined {
        println!("Combined: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Recipient"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for outcome in &report.outcomes {
        table.add_row(vec![
            dim_cell(outcome.ordinal),
            Cell::new(&outcome.display_name),
            Cell::new(&outcome.file_name),
            status_cell(outcome),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} {} file(s)", report.completed(), result.format.extension()))
            .add_attribute(Attribute::Bold),
        count_cell(report.failed()),
    ]);
    println!("{table}");

    if !result.rejected.is_empty() {
        eprintln!("Skipped mapping entries:");
        for message in &result.rejected {
            eprintln!("- {message}");
        }
    }
    if let Some(message) = &report.finish_error {
        eprintln!("error: {message}");
    }
    for failure in report.failures() {
        if let RecordStatus::Failed(message) = &failure.status {
            eprintln!("error: record {}: {message}", failure.ordinal);
        }
    }
}

fn status_cell(outcome: &RecordOutcome) -> Cell {
    match &outcome.status {
        RecordStatus::Written(_) => Cell::new("✓ written")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        RecordStatus::Rendered => Cell::new("rendered").fg(Color::Blue),
        RecordStatus::Failed(_) => Cell::new("✗ failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(failed: usize) -> Cell {
    if failed > 0 {
        Cell::new(format!("{failed} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("0 failed")
    }
}

pub fn field_column_cell(row: &FieldRow) -> Cell {
    match (&row.column, row.reserved) {
        (_, true) => Cell::new("current date (automatic)").fg(Color::Blue),
        (Some(column), false) => Cell::new(column).fg(Color::Green),
        (None, false) => Cell::new("unmapped").fg(Color::Yellow),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
