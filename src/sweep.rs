//! Sweep drivers: walk a parameter axis, equilibrate one immutable query
//! per point, filter by significance, and aggregate into a species table.
//!
//! Execution is sequential and blocking; the first oracle failure aborts
//! the whole sweep with no partial results.

use crate::filter::filter_significant;
use crate::mixture::EquilibriumQuery;
use crate::oracle::{EquilibriumError, EquilibriumOracle};
use crate::series::SpeciesTable;
use crate::sweep_axis::{BackgroundBlend, MolarRatioPoint, SweepAxis};

/// Core sweep loop shared by every 1-D variant: only the query built per
/// axis value differs.
pub fn sweep_with<O, F>(
    oracle: &O,
    axis: &SweepAxis,
    axis_label: &str,
    epsilon: f64,
    make_query: F,
) -> Result<SpeciesTable, EquilibriumError>
where
    O: EquilibriumOracle + ?Sized,
    F: Fn(f64) -> EquilibriumQuery,
{
    let mut table = SpeciesTable::new(axis_label, axis);
    for (index, &value) in axis.values.iter().enumerate() {
        let query = make_query(value);
        let result = oracle.equilibrate_tp(&query)?;
        let retained = filter_significant(&result, epsilon);
        table.record(index, &retained);
    }
    Ok(table)
}

/// Vary temperature at constant pressure and feed ratio.
pub fn sweep_temperature<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    temperatures: &SweepAxis,
    pressure_pa: f64,
    feed: MolarRatioPoint,
    epsilon: f64,
) -> Result<SpeciesTable, EquilibriumError> {
    sweep_with(oracle, temperatures, "Temperature (K)", epsilon, |t| {
        EquilibriumQuery::co2_h2_feed(t, pressure_pa, feed)
    })
}

/// Vary pressure at constant temperature and feed ratio.
pub fn sweep_pressure<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    pressures: &SweepAxis,
    temperature_k: f64,
    feed: MolarRatioPoint,
    epsilon: f64,
) -> Result<SpeciesTable, EquilibriumError> {
    sweep_with(oracle, pressures, "Pressure (Pa)", epsilon, |p| {
        EquilibriumQuery::co2_h2_feed(temperature_k, p, feed)
    })
}

/// Vary the CO2 feed fraction at constant temperature and pressure; the
/// H2 fraction is derived as the complement at every point.
pub fn sweep_feed_fraction<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    co2_fractions: &SweepAxis,
    temperature_k: f64,
    pressure_pa: f64,
    epsilon: f64,
) -> Result<SpeciesTable, EquilibriumError> {
    sweep_with(
        oracle,
        co2_fractions,
        "Feed mole fraction of CO2",
        epsilon,
        |x_co2| {
            EquilibriumQuery::co2_h2_feed(
                temperature_k,
                pressure_pa,
                MolarRatioPoint::from_co2(x_co2),
            )
        },
    )
}

/// Vary the primary-species fraction against a fixed background blend
/// (the Mars-atmosphere feed sweep).
pub fn sweep_blend_fraction<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    primary_fractions: &SweepAxis,
    primary_name: &str,
    blend: &BackgroundBlend,
    temperature_k: f64,
    pressure_pa: f64,
    epsilon: f64,
) -> Result<SpeciesTable, EquilibriumError> {
    let label = format!("Feed mole fraction of {primary_name}");
    sweep_with(oracle, primary_fractions, &label, epsilon, |x| {
        EquilibriumQuery::new(temperature_k, pressure_pa)
            .with_composition(blend.composition_at(primary_name, x))
    })
}
