//! Parameter grid construction: evenly spaced sweep axes, reactant ratio
//! pairs, and background-blend scaling for multi-component feeds.

use serde::{Deserialize, Serialize};

/// An ordered sequence of sweep parameter values (temperature in K,
/// pressure in Pa, or a mole fraction in [0,1]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub values: Vec<f64>,
}

impl SweepAxis {
    /// `count` evenly spaced values inclusive of both bounds.
    /// count >= 1; a single-sample axis holds only `min`.
    pub fn linspace(min: f64, max: f64, count: usize) -> Self {
        let values = if count <= 1 {
            vec![min]
        } else {
            let step = (max - min) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
            // land exactly on the upper bound despite rounding
            values[count - 1] = max;
            values
        };
        SweepAxis { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Element-wise complement axis: 1 - x at every index. Used to derive
    /// the second reactant's feed fractions from the first's.
    pub fn complement(&self) -> SweepAxis {
        SweepAxis {
            values: self.values.iter().map(|x| 1.0 - x).collect(),
        }
    }

    /// Axis scaled by a constant factor.
    pub fn scaled(&self, factor: f64) -> SweepAxis {
        SweepAxis {
            values: self.values.iter().map(|x| factor * x).collect(),
        }
    }
}

/// A two-component reactant composition (CO2 fraction, H2 fraction),
/// summing to 1 within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MolarRatioPoint {
    pub x_co2: f64,
    pub x_h2: f64,
}

impl MolarRatioPoint {
    /// Ratio point from the CO2 fraction; H2 takes the complement.
    pub fn from_co2(x_co2: f64) -> Self {
        MolarRatioPoint {
            x_co2,
            x_h2: 1.0 - x_co2,
        }
    }

    pub fn new(x_co2: f64, x_h2: f64) -> Self {
        MolarRatioPoint { x_co2, x_h2 }
    }

    pub fn sum(&self) -> f64 {
        self.x_co2 + self.x_h2
    }

    /// Label like "0.2:0.8" for plot panels and reports.
    pub fn label(&self) -> String {
        format!("{}:{}", self.x_co2, self.x_h2)
    }
}

/// Ratio points derived from an axis of primary-species fractions.
pub fn ratio_points(primary: &SweepAxis) -> Vec<MolarRatioPoint> {
    primary
        .values
        .iter()
        .map(|&x| MolarRatioPoint::from_co2(x))
        .collect()
}

/// A fixed multi-species gas blend making up the non-primary side of a
/// feed (e.g. the Martian atmosphere behind an H2 axis). Each background
/// species' fraction at a sweep point is its template fraction scaled by
/// (1 - primary fraction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundBlend {
    pub template: Vec<(String, f64)>,
}

impl BackgroundBlend {
    pub fn new(template: &[(&str, f64)]) -> Self {
        BackgroundBlend {
            template: template
                .iter()
                .map(|(name, x)| (name.to_string(), *x))
                .collect(),
        }
    }

    pub fn mars() -> Self {
        BackgroundBlend::new(crate::constants::MARS_BACKGROUND)
    }

    /// Full feed composition at one sweep point: the primary species at
    /// `primary_x` plus every template species scaled by the remainder.
    pub fn composition_at(&self, primary_name: &str, primary_x: f64) -> Vec<(String, f64)> {
        let remainder = 1.0 - primary_x;
        let mut composition = Vec::with_capacity(self.template.len() + 1);
        composition.push((primary_name.to_string(), primary_x));
        for (name, fraction) in &self.template {
            composition.push((name.clone(), fraction * remainder));
        }
        composition
    }

    /// One derived axis per template species, index-aligned with `primary`.
    pub fn scaled_axes(&self, primary: &SweepAxis) -> Vec<(String, SweepAxis)> {
        let remainder = primary.complement();
        self.template
            .iter()
            .map(|(name, fraction)| (name.clone(), remainder.scaled(*fraction)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{T_MAX_K, T_MIN_K, T_SAMPLES, X_CO2_MAX, X_CO2_MIN, X_CO2_SAMPLES};
    use approx::assert_abs_diff_eq;
    use more_asserts::assert_le;

    #[test]
    fn linspace_hits_both_bounds() {
        let axis = SweepAxis::linspace(100_000.0, 2_000_000.0, 10);
        assert_eq!(axis.len(), 10);
        assert_abs_diff_eq!(axis.values[0], 100_000.0);
        assert_abs_diff_eq!(axis.values[9], 2_000_000.0);
    }

    #[test]
    fn linspace_is_non_decreasing() {
        let axis = SweepAxis::linspace(298.0, 700.0, 50);
        for pair in axis.values.windows(2) {
            assert_le!(pair[0], pair[1]);
        }
    }

    #[test]
    fn linspace_single_sample_is_min() {
        let axis = SweepAxis::linspace(673.15, 700.0, 1);
        assert_eq!(axis.values, vec![673.15]);
    }

    #[test]
    fn temperature_axis_matches_expected_grid() {
        let axis = SweepAxis::linspace(T_MIN_K, T_MAX_K, T_SAMPLES);
        let expected = [298.0, 378.4, 458.8, 539.2, 619.6, 700.0];
        assert_eq!(axis.len(), expected.len());
        for (got, want) in axis.values.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn complement_axis_sums_pairwise_to_one() {
        let co2 = SweepAxis::linspace(X_CO2_MIN, X_CO2_MAX, X_CO2_SAMPLES);
        let h2 = co2.complement();
        assert_eq!(co2.len(), h2.len());
        for (a, b) in co2.values.iter().zip(h2.values.iter()) {
            assert_abs_diff_eq!(a + b, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ratio_points_sum_to_one() {
        let axis = SweepAxis::linspace(0.05, 0.35, 7);
        for point in ratio_points(&axis) {
            assert_abs_diff_eq!(point.sum(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn background_blend_scales_with_remainder() {
        let blend = BackgroundBlend::new(&[("CO2", 0.9), ("N2", 0.1)]);
        let composition = blend.composition_at("H2", 0.6);
        assert_eq!(composition[0], ("H2".to_string(), 0.6));
        assert_abs_diff_eq!(composition[1].1, 0.9 * 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(composition[2].1, 0.1 * 0.4, epsilon = 1e-12);
    }

    #[test]
    fn background_axes_stay_aligned_with_primary() {
        let blend = BackgroundBlend::mars();
        let h2 = SweepAxis::linspace(0.05, 0.95, 50);
        for (_, axis) in blend.scaled_axes(&h2) {
            assert_eq!(axis.len(), h2.len());
        }
    }
}
