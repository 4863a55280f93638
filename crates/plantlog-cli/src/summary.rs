use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use plantlog_model::{Confidence, ParseReport};

pub fn print_summary(report: &ParseReport) {
    println!("Sheet: {}", report.metadata.sheet_name);
    match report.header_row {
        Some(row) => println!("Header row: {row}"),
        None => println!("Header row: not detected"),
    }
    println!(
        "Columns: {} mapped, {} unmapped",
        report.metadata.mapped_columns, report.metadata.unmapped_columns
    );
    if report.metadata.multi_asset_detected {
        println!("Multiple assets detected");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Unit"),
        header_cell("Assets"),
        header_cell("Cells"),
        header_cell("Low"),
        header_cell("Medium"),
        header_cell("High"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_cells = 0usize;
    for (param, assets) in &report.parameters {
        let cells: Vec<_> = report
            .parsed_data
            .iter()
            .filter(|cell| &cell.param_name == param)
            .collect();
        let count_at = |level: Confidence| cells.iter().filter(|c| c.confidence == level).count();
        total_cells += cells.len();
        let unit = report.units.get(param).cloned().unwrap_or_default();
        table.add_row(vec![
            Cell::new(param).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(unit),
            Cell::new(assets.join(", ")),
            Cell::new(cells.len()),
            confidence_count_cell(count_at(Confidence::Low), Color::Red),
            confidence_count_cell(count_at(Confidence::Medium), Color::Yellow),
            confidence_count_cell(count_at(Confidence::High), Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.detected_assets.join(", ")),
        Cell::new(total_cells).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_unmapped_table(report);
    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &report.warnings {
            println!("- {warning}");
        }
    }
    if !report.errors.is_empty() {
        eprintln!("Errors:");
        for error in &report.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_unmapped_table(report: &ParseReport) {
    if report.unmapped_columns.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Col"),
        header_cell("Header"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in &report.unmapped_columns {
        table.add_row(vec![
            Cell::new(column.col),
            Cell::new(&column.header),
            Cell::new(&column.reason).fg(Color::DarkGrey),
        ]);
    }
    println!();
    println!("Unmapped columns:");
    println!("{table}");
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
        .set_width(120);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
