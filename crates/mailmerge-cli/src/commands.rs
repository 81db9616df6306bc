use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info_span;

use mailmerge_cli::pipeline::{
    GenerateRequest, describe_fields, generate, load_layout, load_records,
};
use mailmerge_cli::types::GenerateResult;
use mailmerge_model::{CsvMode, OutputFormat};

use crate::cli::{FieldsArgs, GenerateArgs, OutputFormatArg, PreviewArgs, TableArgs};
use crate::summary::{apply_table_style, dim_cell, field_column_cell, header_cell};

const PROGRESS_TEMPLATE: &str = "{bar:40.cyan/blue} {pos}/{len} documents {msg}";

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", template = %args.template.display());
    let _guard = span.enter();

    let mut request = GenerateRequest::new(
        &args.input.table,
        &args.template,
        &args.output_dir,
        Local::now().naive_local(),
    );
    request.format = match args.format {
        OutputFormatArg::Pdf => OutputFormat::Pdf,
        OutputFormatArg::Text => OutputFormat::Text,
    };
    request.csv_mode = csv_mode(&args.input);
    if let Some(path) = &args.layout {
        request.layout = load_layout(path)?;
    }
    request.mapping_file = args.mapping.clone();
    request.assignments = args.assignments.clone();
    request.auto_map = !args.no_auto_map;
    request.record = args
        .record
        .map(usize::try_from)
        .transpose()
        .context("record number out of range")?;
    request.combined = args.combined;
    request.dry_run = args.dry_run;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(0);
        bar.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?);
        bar
    };
    let result = generate(&request, |counts| {
        progress.set_length(counts.total as u64);
        progress.set_position(counts.processed() as u64);
        if counts.failed > 0 {
            progress.set_message(format!("{}% ({} failed)", counts.percent(), counts.failed));
        } else {
            progress.set_message(format!("{}%", counts.percent()));
        }
    });
    progress.finish_and_clear();
    result
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let records = load_records(&args.input.table, csv_mode(&args.input))?;
    println!(
        "{}: {} records, {} columns",
        args.input.table.display(),
        records.len(),
        records.columns.len()
    );

    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(records.columns.iter().map(header_cell));
    table.set_header(header);
    apply_table_style(&mut table);
    for (idx, record) in records.records.iter().take(args.rows).enumerate() {
        let mut row = vec![dim_cell(idx + 1)];
        row.extend(records.columns.iter().map(|column| match record.get(column) {
            Some(value) if !value.is_empty() => Cell::new(value),
            _ => dim_cell("-"),
        }));
        table.add_row(row);
    }
    println!("{table}");
    if records.len() > args.rows {
        println!("... {} more", records.len() - args.rows);
    }
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let rows = describe_fields(&args.input.table, &args.template, csv_mode(&args.input))?;
    if rows.is_empty() {
        println!("No placeholders found in {}", args.template.display());
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Placeholder"), header_cell("Column")]);
    apply_table_style(&mut table);
    for row in &rows {
        table.add_row(vec![Cell::new(&row.placeholder), field_column_cell(row)]);
    }
    println!("{table}");
    let unmapped = rows
        .iter()
        .filter(|row| !row.reserved && row.column.is_none())
        .count();
    if unmapped > 0 {
        println!("{unmapped} placeholder(s) need a column: use --map PLACEHOLDER=COLUMN");
    }
    Ok(())
}

fn csv_mode(args: &TableArgs) -> CsvMode {
    if args.quoted_csv {
        CsvMode::Quoted
    } else {
        CsvMode::Naive
    }
}
