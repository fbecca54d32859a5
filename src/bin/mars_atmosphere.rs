//! Mars-feed sweep: vary the H2 feed fraction against the Martian
//! atmosphere background blend at the optimal temperature and pressure,
//! keeping trace species down to 1e-5.

use sabatier_eq_rust::chart_png::{ChartConfig, render_species_chart};
use sabatier_eq_rust::constants::{
    P_OPT_PA, T_OPT_K, TRACE_SPECIES_EPSILON, X_H2_MAX, X_H2_MIN, X_H2_SAMPLES,
};
use sabatier_eq_rust::report::{export_json, print_species_table};
use sabatier_eq_rust::sabatier::SabatierOracle;
use sabatier_eq_rust::sweep::sweep_blend_fraction;
use sabatier_eq_rust::sweep_axis::{BackgroundBlend, SweepAxis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("out")?;
    let oracle = SabatierOracle::new();
    let blend = BackgroundBlend::mars();
    let h2_fractions = SweepAxis::linspace(X_H2_MIN, X_H2_MAX, X_H2_SAMPLES);

    let table = sweep_blend_fraction(
        &oracle,
        &h2_fractions,
        "H2",
        &blend,
        T_OPT_K,
        P_OPT_PA,
        TRACE_SPECIES_EPSILON,
    )?;
    print_species_table("Species (>1e-5) vs H2 feed fraction, Mars feed", &table);

    render_species_chart(
        &table,
        &ChartConfig::default().with_log_scale(),
        "out/mars_atmosphere_log.png",
    )?;
    render_species_chart(
        &table,
        &ChartConfig::default(),
        "out/mars_atmosphere_linear.png",
    )?;
    export_json("out/mars_atmosphere.json", &table)?;
    Ok(())
}
