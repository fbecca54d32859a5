//! Stoichiometric methane-yield grid: low-temperature band crossed with a
//! wide pressure range at the 1:4 CO2:H2 feed.

use sabatier_eq_rust::chart_png::render_yield_panels;
use sabatier_eq_rust::constants::{
    OPT_X_CO2, OPT_X_H2, P_GRID_SAMPLES, P_MIN_PA, P_STOICH_MAX_PA, T_MIN_K, T_SAMPLES,
    T_STOICH_MAX_K,
};
use sabatier_eq_rust::report::{export_json, print_yield_summary};
use sabatier_eq_rust::sabatier::SabatierOracle;
use sabatier_eq_rust::sweep_axis::{MolarRatioPoint, SweepAxis};
use sabatier_eq_rust::yield_grid::methane_yield_grid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("out")?;
    let oracle = SabatierOracle::new();
    let feed = MolarRatioPoint::new(OPT_X_CO2, OPT_X_H2);

    let temperatures = SweepAxis::linspace(T_MIN_K, T_STOICH_MAX_K, T_SAMPLES);
    let pressures = SweepAxis::linspace(P_MIN_PA, P_STOICH_MAX_PA, P_GRID_SAMPLES);

    let grid = methane_yield_grid(&oracle, &temperatures, &pressures, feed)?;
    print_yield_summary(feed, &grid);

    render_yield_panels(
        &[(feed, grid.clone())],
        1000,
        600,
        "out/stoichiometric_methane_yield.png",
    )?;
    export_json("out/stoichiometric_methane_yield.json", &grid)?;
    Ok(())
}
