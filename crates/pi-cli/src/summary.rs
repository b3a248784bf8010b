//! Run summaries printed after each subcommand.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use pi_cli::pipeline::{BuildResult, GenerateResult};

pub fn print_build_summary(result: &BuildResult, show_distribution: bool) {
    println!("Base corpus: {}", result.output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Scan"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total files"), Cell::new(result.stats.total)]);
    table.add_row(vec![Cell::new("Accepted"), Cell::new(result.stats.accepted)]);
    table.add_row(vec![Cell::new("Rejected"), Cell::new(result.stats.rejected)]);
    if result.stats.read_errors > 0 {
        table.add_row(vec![
            Cell::new("  of which read errors"),
            Cell::new(result.stats.read_errors),
        ]);
    }
    println!("{table}");

    if show_distribution && !result.stats.layer_counts.is_empty() {
        println!("Layer count distribution (accepted icons):");
        for (layers, count) in &result.stats.layer_counts {
            let label = if *layers == 1 { "layer" } else { "layers" };
            println!("- {count} icon(s) with {layers} {label}");
        }
    }
}

pub fn print_generate_summary(result: &GenerateResult) {
    let plural = if result.merged == 1 { "" } else { "s" };
    println!("Merged {} icon{plural}", result.merged);

    if !result.outputs.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Output"), header_cell("Path")]);
        apply_table_style(&mut table);
        for output in &result.outputs {
            table.add_row(vec![
                Cell::new(output.kind),
                Cell::new(output.path.display()),
            ]);
        }
        println!("{table}");
    }

    if !result.omitted.is_empty() {
        println!("Omitted (no source data):");
        for name in &result.omitted {
            println!("- {name}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
