//! Per-ratio methane-yield grids: six CO2:H2 feed ratios, each swept over
//! the full temperature x pressure grid and plotted as its own panel.

use sabatier_eq_rust::chart_png::render_yield_panels;
use sabatier_eq_rust::constants::{
    MOLAR_RATIOS, P_GRID_SAMPLES, P_MIN_PA, P_RATIO_MAX_PA, T_MAX_K, T_MIN_K, T_SAMPLES,
};
use sabatier_eq_rust::report::{export_json, print_yield_summary};
use sabatier_eq_rust::sabatier::SabatierOracle;
use sabatier_eq_rust::sweep_axis::{MolarRatioPoint, SweepAxis};
use sabatier_eq_rust::yield_grid::methane_yield_grids;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("out")?;
    let oracle = SabatierOracle::new();
    let ratios: Vec<MolarRatioPoint> = MOLAR_RATIOS
        .iter()
        .map(|&(x_co2, x_h2)| MolarRatioPoint::new(x_co2, x_h2))
        .collect();

    let temperatures = SweepAxis::linspace(T_MIN_K, T_MAX_K, T_SAMPLES);
    let pressures = SweepAxis::linspace(P_MIN_PA, P_RATIO_MAX_PA, P_GRID_SAMPLES);

    let grids = methane_yield_grids(&oracle, &ratios, &temperatures, &pressures)?;
    for (ratio, grid) in &grids {
        print_yield_summary(*ratio, grid);
    }

    render_yield_panels(&grids, 600, 400, "out/molar_ratio_methane_yield.png")?;
    export_json("out/molar_ratio_methane_yield.json", &grids)?;
    Ok(())
}
