use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use usergen_ingest::ColumnDetection;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("{}", summary_table(result));
    if let Some(written) = &result.written {
        for attempt in &written.rejected {
            eprintln!(
                "warning: could not write {}: {}",
                attempt.path.display(),
                attempt.error
            );
        }
    }
}

fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Left);

    table.add_row(vec![
        label_cell("Input"),
        Cell::new(result.source.display()),
    ]);
    table.add_row(vec![
        label_cell("Column"),
        Cell::new(format!(
            "{} ({})",
            result.column.name,
            detection_label(result.column.detection)
        )),
    ]);
    table.add_row(vec![label_cell("Rows"), Cell::new(result.total_rows)]);
    table.add_row(vec![
        label_cell("Skipped"),
        count_cell(result.skipped_rows, Color::Yellow),
    ]);
    table.add_row(vec![label_cell("Names"), Cell::new(result.names_processed)]);
    table.add_row(vec![
        label_cell("Unique candidates"),
        Cell::new(result.candidates)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    let output = match &result.written {
        Some(written) if written.fallback_used() => Cell::new(format!(
            "{} (fallback)",
            written.path.display()
        ))
        .fg(Color::Yellow),
        Some(written) => Cell::new(written.path.display()),
        None => dim_cell("dry run"),
    };
    table.add_row(vec![label_cell("Output"), output]);
    table
}

fn detection_label(detection: ColumnDetection) -> &'static str {
    match detection {
        ColumnDetection::Explicit => "explicit",
        ColumnDetection::AutoDetected => "auto-detected",
        ColumnDetection::Fallback => "first column",
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
