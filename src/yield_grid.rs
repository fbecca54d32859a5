//! Methane-yield grid sweeps: single-species 2-D (temperature x pressure)
//! variants of the sweep, one independent grid per feed ratio.
//!
//! Ratio x temperature x pressure iteration is an explicit Cartesian
//! product of `GridPoint` records rather than nested index-aligned loops.

use crate::mixture::EquilibriumQuery;
use crate::oracle::{EquilibriumError, EquilibriumOracle};
use crate::sweep_axis::{MolarRatioPoint, SweepAxis};
use serde::Serialize;

/// One combination in a ratio x temperature x pressure grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub ratio_index: usize,
    pub t_index: usize,
    pub p_index: usize,
    pub ratio: MolarRatioPoint,
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

/// All (ratio, T, P) combinations, pressure fastest, ratio slowest.
pub fn grid_points<'a>(
    ratios: &'a [MolarRatioPoint],
    temperatures: &'a SweepAxis,
    pressures: &'a SweepAxis,
) -> impl Iterator<Item = GridPoint> + 'a {
    ratios.iter().enumerate().flat_map(move |(ri, &ratio)| {
        temperatures
            .values
            .iter()
            .enumerate()
            .flat_map(move |(ti, &t)| {
                pressures.values.iter().enumerate().map(move |(pi, &p)| GridPoint {
                    ratio_index: ri,
                    t_index: ti,
                    p_index: pi,
                    ratio,
                    temperature_k: t,
                    pressure_pa: p,
                })
            })
    })
}

/// CH4 mole fraction over a temperature x pressure grid, row-major with
/// temperature as the row index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldGrid {
    pub temperature_axis: SweepAxis,
    pub pressure_axis: SweepAxis,
    values: Vec<f64>,
}

impl YieldGrid {
    fn zeroed(temperature_axis: &SweepAxis, pressure_axis: &SweepAxis) -> Self {
        YieldGrid {
            temperature_axis: temperature_axis.clone(),
            pressure_axis: pressure_axis.clone(),
            values: vec![0.0; temperature_axis.len() * pressure_axis.len()],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.temperature_axis.len(), self.pressure_axis.len())
    }

    pub fn get(&self, t_index: usize, p_index: usize) -> f64 {
        self.values[t_index * self.pressure_axis.len() + p_index]
    }

    fn set(&mut self, t_index: usize, p_index: usize, value: f64) {
        self.values[t_index * self.pressure_axis.len() + p_index] = value;
    }

    /// One row of yields (fixed temperature, every pressure).
    pub fn row(&self, t_index: usize) -> &[f64] {
        let width = self.pressure_axis.len();
        &self.values[t_index * width..(t_index + 1) * width]
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Equilibrium CH4 mole fraction for one (T, P, feed) combination.
pub fn final_methane<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    temperature_k: f64,
    pressure_pa: f64,
    feed: MolarRatioPoint,
) -> Result<f64, EquilibriumError> {
    let query = EquilibriumQuery::co2_h2_feed(temperature_k, pressure_pa, feed);
    let result = oracle.equilibrate_tp(&query)?;
    result
        .mole_fraction("CH4")
        .ok_or_else(|| EquilibriumError::UnknownSpecies("CH4".to_string()))
}

/// Methane yield over a full temperature x pressure grid at one ratio.
pub fn methane_yield_grid<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    temperatures: &SweepAxis,
    pressures: &SweepAxis,
    feed: MolarRatioPoint,
) -> Result<YieldGrid, EquilibriumError> {
    let mut grid = YieldGrid::zeroed(temperatures, pressures);
    for point in grid_points(std::slice::from_ref(&feed), temperatures, pressures) {
        let x_ch4 = final_methane(oracle, point.temperature_k, point.pressure_pa, point.ratio)?;
        grid.set(point.t_index, point.p_index, x_ch4);
    }
    Ok(grid)
}

/// One independent grid per feed ratio; no cross-ratio aggregation, each
/// grid feeds its own plot panel.
pub fn methane_yield_grids<O: EquilibriumOracle + ?Sized>(
    oracle: &O,
    ratios: &[MolarRatioPoint],
    temperatures: &SweepAxis,
    pressures: &SweepAxis,
) -> Result<Vec<(MolarRatioPoint, YieldGrid)>, EquilibriumError> {
    let mut grids: Vec<(MolarRatioPoint, YieldGrid)> = ratios
        .iter()
        .map(|&ratio| (ratio, YieldGrid::zeroed(temperatures, pressures)))
        .collect();
    for point in grid_points(ratios, temperatures, pressures) {
        let x_ch4 = final_methane(oracle, point.temperature_k, point.pressure_pa, point.ratio)?;
        grids[point.ratio_index].1.set(point.t_index, point.p_index, x_ch4);
    }
    Ok(grids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::EquilibriumResult;
    use approx::assert_abs_diff_eq;

    /// CH4 fraction encodes its (T, P) cell so grid placement is checkable.
    struct StampOracle {
        species: Vec<String>,
    }

    impl StampOracle {
        fn new() -> Self {
            StampOracle {
                species: ["CO2", "H2", "CH4", "H2O"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        }

        fn stamp(temperature_k: f64, pressure_pa: f64) -> f64 {
            temperature_k * 1e-6 + pressure_pa * 1e-12
        }
    }

    impl EquilibriumOracle for StampOracle {
        fn species_names(&self) -> &[String] {
            &self.species
        }

        fn equilibrate_tp(
            &self,
            query: &EquilibriumQuery,
        ) -> Result<EquilibriumResult, EquilibriumError> {
            let x_ch4 = Self::stamp(query.temperature_k, query.pressure_pa);
            Ok(EquilibriumResult::new(
                self.species.clone(),
                vec![0.2, 0.6, x_ch4, 0.2 - x_ch4],
            ))
        }
    }

    #[test]
    fn grid_points_cover_the_full_product() {
        let ratios = vec![MolarRatioPoint::from_co2(0.1), MolarRatioPoint::from_co2(0.2)];
        let temps = SweepAxis::linspace(298.0, 700.0, 3);
        let pressures = SweepAxis::linspace(1e5, 3e6, 4);
        let points: Vec<GridPoint> = grid_points(&ratios, &temps, &pressures).collect();
        assert_eq!(points.len(), 2 * 3 * 4);
        // pressure varies fastest, ratio slowest
        assert_eq!(points[0].p_index, 0);
        assert_eq!(points[1].p_index, 1);
        assert_eq!(points[4].t_index, 1);
        assert_eq!(points[12].ratio_index, 1);
    }

    #[test]
    fn two_by_three_grid_matches_oracle_cells() {
        let oracle = StampOracle::new();
        let temps = SweepAxis::linspace(300.0, 400.0, 2);
        let pressures = SweepAxis::linspace(1e5, 3e5, 3);
        let feed = MolarRatioPoint::from_co2(0.2);
        let grid = methane_yield_grid(&oracle, &temps, &pressures, feed).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        for ti in 0..2 {
            for pi in 0..3 {
                let expected =
                    StampOracle::stamp(temps.values[ti], pressures.values[pi]);
                assert_abs_diff_eq!(grid.get(ti, pi), expected, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn per_ratio_grids_are_independent() {
        let oracle = StampOracle::new();
        let ratios = vec![MolarRatioPoint::from_co2(0.1), MolarRatioPoint::from_co2(0.4)];
        let temps = SweepAxis::linspace(300.0, 340.0, 2);
        let pressures = SweepAxis::linspace(1e5, 2e5, 2);
        let grids = methane_yield_grids(&oracle, &ratios, &temps, &pressures).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].1, grids[1].1); // oracle ignores the ratio here
        assert_abs_diff_eq!(grids[0].0.x_co2, 0.1);
        assert_abs_diff_eq!(grids[1].0.x_co2, 0.4);
    }

    #[test]
    fn rows_expose_pressure_slices() {
        let oracle = StampOracle::new();
        let temps = SweepAxis::linspace(300.0, 400.0, 2);
        let pressures = SweepAxis::linspace(1e5, 3e5, 3);
        let grid =
            methane_yield_grid(&oracle, &temps, &pressures, MolarRatioPoint::from_co2(0.2))
                .unwrap();
        assert_eq!(grid.row(1).len(), 3);
        assert_abs_diff_eq!(grid.row(1)[2], grid.get(1, 2));
    }
}
