use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use titanic_cli::pipeline::ConversionResult;
use titanic_model::Mode;

pub fn print_summary(result: &ConversionResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(result.input.display()),
    ]);
    table.add_row(vec![Cell::new("Mode"), mode_cell(result.mode)]);
    table.add_row(vec![Cell::new("Output"), output_cell(result)]);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        dim_cell(format!("{} ms", result.duration.as_millis())),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn mode_cell(mode: Mode) -> Cell {
    let color = match mode {
        Mode::Training => Color::Green,
        Mode::Inference => Color::Blue,
    };
    Cell::new(mode).fg(color).add_attribute(Attribute::Bold)
}

fn output_cell(result: &ConversionResult) -> Cell {
    if result.written {
        Cell::new(result.output.display())
    } else {
        dim_cell(format!("{} (dry run, not written)", result.output.display()))
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
