use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    match &summary.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Shape: {} rows x {} columns", summary.rows, summary.columns);
    println!("Indicator columns: {}", summary.indicator_columns);
    if summary.coerced_cells > 0 {
        println!("Coerced cells: {}", summary.coerced_cells);
    }

    let mapping = summary
        .target_mapping
        .iter()
        .map(|(value, code)| {
            if value.is_empty() {
                format!("(blank)={code}")
            } else {
                format!("{value}={code}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    println!("Target mapping: {mapping}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Mean"),
        header_cell("Std dev"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for params in &summary.scalers {
        let std_cell = if params.std_dev == 0.0 {
            Cell::new(format!("{:.4}", params.std_dev)).fg(Color::Yellow)
        } else {
            Cell::new(format!("{:.4}", params.std_dev))
        };
        table.add_row(vec![
            Cell::new(&params.column),
            Cell::new(format!("{:.4}", params.mean)),
            std_cell,
        ]);
    }
    println!("{table}");
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
