use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::Conversion;
use roster_model::CanonicalField;

pub fn print_summary(input: &Path, conversion: &Conversion) {
    println!("File: {}", input.display());
    match &conversion.artifact {
        Some(path) => println!("Artifact: {}", path.display()),
        None => println!("Artifact: not written"),
    }

    let result = &conversion.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Skipped"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table, 80);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(result.accepted.len(), Color::Green),
        count_cell(result.rejected.len(), Color::Red),
        count_cell(conversion.skipped.len(), Color::Yellow),
        Cell::new(result.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_mapping_table(conversion);
    print_rejected_table(conversion);
    print_skipped(conversion);
}

fn print_mapping_table(conversion: &Conversion) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Column")]);
    apply_table_style(&mut table, 80);
    for field in CanonicalField::ALL {
        let column = match conversion.mapping.column_for(field) {
            Some(column) => Cell::new(column),
            None => Cell::new("unresolved").fg(Color::Yellow),
        };
        table.add_row(vec![field_cell(field), column]);
    }
    println!();
    println!("Columns:");
    println!("{table}");
}

fn print_rejected_table(conversion: &Conversion) {
    let rejected = &conversion.result.rejected;
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reasons")]);
    apply_table_style(&mut table, 120);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in rejected {
        let reasons: Vec<String> = record.reasons.iter().map(ToString::to_string).collect();
        table.add_row(vec![
            Cell::new(record.row).fg(Color::Red),
            Cell::new(reasons.join("\n")),
        ]);
    }
    println!();
    println!("Rejected rows:");
    println!("{table}");
}

fn print_skipped(conversion: &Conversion) {
    if conversion.skipped.is_empty() {
        return;
    }
    println!();
    println!("Skipped:");
    for skipped in &conversion.skipped {
        println!("- {skipped}");
    }
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
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

fn field_cell(field: CanonicalField) -> Cell {
    Cell::new(field.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
