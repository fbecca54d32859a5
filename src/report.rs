//! Console reporting and JSON export of sweep outputs.

use crate::series::SpeciesTable;
use crate::sweep_axis::MolarRatioPoint;
use crate::yield_grid::YieldGrid;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Prints one line per species: retained-point count and fraction range.
pub fn print_species_table(title: &str, table: &SpeciesTable) {
    println!("{}", title.bold());
    println!(
        "  {} sweep points over {}",
        table.len(),
        table.axis_label.cyan()
    );
    for column in table.columns() {
        let filled: Vec<f64> = column.mole_fractions.iter().filter_map(|s| *s).collect();
        let min = filled.iter().copied().fold(f64::INFINITY, f64::min);
        let max = filled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "  {:>6} retained at {}/{} points, x = {:.4e} .. {:.4e}",
            column.name.green(),
            filled.len(),
            table.len(),
            min,
            max
        );
    }
}

/// Prints the yield envelope for one feed ratio's grid.
pub fn print_yield_summary(ratio: MolarRatioPoint, grid: &YieldGrid) {
    let (rows, cols) = grid.shape();
    println!(
        "CO2:H2 = {} grid {}x{} CH4 yield {:.4e} .. {:.4e}",
        ratio.label().bold(),
        rows,
        cols,
        grid.min_value(),
        grid.max_value()
    );
}

/// Serializes any sweep output to pretty-printed JSON.
pub fn export_json<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}
