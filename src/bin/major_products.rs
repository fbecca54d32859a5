//! Major-species equilibrium sweeps at the optimal reactor point: vary
//! temperature, pressure, and CO2 feed fraction one at a time, holding
//! the other two properties at their optimal values.

use sabatier_eq_rust::chart_png::{ChartConfig, render_species_chart};
use sabatier_eq_rust::constants::{
    MAJOR_SPECIES_EPSILON, OPT_X_CO2, OPT_X_H2, P_MAX_PA, P_MIN_PA, P_OPT_PA, P_SAMPLES, T_MAX_K,
    T_MIN_K, T_OPT_K, T_SAMPLES, X_CO2_MAX, X_CO2_MIN, X_CO2_SAMPLES,
};
use sabatier_eq_rust::report::{export_json, print_species_table};
use sabatier_eq_rust::sabatier::SabatierOracle;
use sabatier_eq_rust::sweep::{sweep_feed_fraction, sweep_pressure, sweep_temperature};
use sabatier_eq_rust::sweep_axis::{MolarRatioPoint, SweepAxis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("out")?;
    let oracle = SabatierOracle::new();
    let feed = MolarRatioPoint::new(OPT_X_CO2, OPT_X_H2);

    // Vary temperature, constant P and feed fractions
    let temperatures = SweepAxis::linspace(T_MIN_K, T_MAX_K, T_SAMPLES);
    let by_temperature =
        sweep_temperature(&oracle, &temperatures, P_OPT_PA, feed, MAJOR_SPECIES_EPSILON)?;
    print_species_table("Major species (>1%) vs temperature", &by_temperature);
    render_species_chart(
        &by_temperature,
        &ChartConfig::default(),
        "out/major_species_vs_temperature.png",
    )?;

    // Vary pressure, constant T and feed fractions
    let pressures = SweepAxis::linspace(P_MIN_PA, P_MAX_PA, P_SAMPLES);
    let by_pressure = sweep_pressure(&oracle, &pressures, T_OPT_K, feed, MAJOR_SPECIES_EPSILON)?;
    print_species_table("Major species (>1%) vs pressure", &by_pressure);
    render_species_chart(
        &by_pressure,
        &ChartConfig::default(),
        "out/major_species_vs_pressure.png",
    )?;

    // Vary CO2 feed fraction, constant T and P
    let co2_fractions = SweepAxis::linspace(X_CO2_MIN, X_CO2_MAX, X_CO2_SAMPLES);
    let by_feed =
        sweep_feed_fraction(&oracle, &co2_fractions, T_OPT_K, P_OPT_PA, MAJOR_SPECIES_EPSILON)?;
    print_species_table("Major species (>1%) vs CO2 feed fraction", &by_feed);
    render_species_chart(
        &by_feed,
        &ChartConfig::default(),
        "out/major_species_vs_feed_fraction.png",
    )?;

    export_json(
        "out/major_products.json",
        &vec![&by_temperature, &by_pressure, &by_feed],
    )?;
    Ok(())
}
