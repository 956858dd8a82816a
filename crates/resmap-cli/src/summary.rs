use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use resmap_cli::pipeline::MigrateOutcome;

pub fn print_summary(result: &MigrateOutcome) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &result.report_json {
        println!("Report: {}", path.display());
    }
    println!("Rows processed: {}", result.stats.total_rows);
    println!("Rows changed: {}", result.stats.rows_changed);

    if result.stats.transitions.is_empty() {
        println!();
        println!("No category changes.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Category change"), header_cell("Rows")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (transition, count) in &result.stats.transitions {
            table.add_row(vec![Cell::new(transition), Cell::new(count)]);
        }
        println!();
        println!("Category changes:");
        println!("{table}");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Organizations")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &result.stats.distribution {
        table.add_row(vec![Cell::new(category), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.stats.total_rows).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Final category distribution:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
