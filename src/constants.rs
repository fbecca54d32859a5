use image::Rgb;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Sabatier reaction: CO2 + 4 H2 <=> CH4 + 2 H2O

pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314462618;
pub const STANDARD_PRESSURE_PA: f64 = 100_000.0; // 1 bar reference state
pub const PA_PER_BAR: f64 = 100_000.0;

// Optimal reactor operating point used when a property is held constant
pub const T_OPT_K: f64 = 673.15;
pub const P_OPT_PA: f64 = 500_000.0; // 5 bar
pub const OPT_X_CO2: f64 = 0.2;
pub const OPT_X_H2: f64 = 1.0 - OPT_X_CO2;

// Varied temperature range (constant P and feed fractions)
pub const T_MIN_K: f64 = 298.0;
pub const T_MAX_K: f64 = 700.0;
pub const T_SAMPLES: usize = 6;

// Varied pressure range (constant T and feed fractions)
pub const P_MIN_PA: f64 = 100_000.0; // 1 bar
pub const P_MAX_PA: f64 = 2_000_000.0; // 20 bar
pub const P_SAMPLES: usize = 10;

// Varied CO2 feed fraction range (constant T and P)
pub const X_CO2_MIN: f64 = 0.05;
pub const X_CO2_MAX: f64 = 0.35;
pub const X_CO2_SAMPLES: usize = 7;

// Low-temperature stoichiometric yield grid
pub const T_STOICH_MAX_K: f64 = 338.0;
pub const P_STOICH_MAX_PA: f64 = 5_500_000.0; // 5.5 MPa
pub const P_GRID_SAMPLES: usize = 50;

// Molar-ratio yield grid pressure ceiling
pub const P_RATIO_MAX_PA: f64 = 3_000_000.0; // 3 MPa

// Mars atmosphere feed sweep (H2 fraction against the background blend)
pub const X_H2_MIN: f64 = 0.05;
pub const X_H2_MAX: f64 = 0.95;
pub const X_H2_SAMPLES: usize = 50;

// Significance thresholds for species retention
pub const MAJOR_SPECIES_EPSILON: f64 = 0.01;
pub const TRACE_SPECIES_EPSILON: f64 = 0.00001;

// Martian atmosphere composition used as the non-H2 side of the feed.
// Fractions are the surveyed values; the oracle normalizes the blend.
pub const MARS_X_CO2: f64 = 0.9532;
pub const MARS_X_N2: f64 = 0.027;
pub const MARS_X_AR: f64 = 0.016;
pub const MARS_X_O2: f64 = 0.013;
pub const MARS_X_H2O: f64 = 0.03;

pub const MARS_BACKGROUND: &[(&str, f64)] = &[
    ("CO2", MARS_X_CO2),
    ("N2", MARS_X_N2),
    ("Ar", MARS_X_AR),
    ("O2", MARS_X_O2),
    ("H2O", MARS_X_H2O),
];

// CO2:H2 feed ratios examined by the per-ratio yield grids
pub const MOLAR_RATIOS: &[(f64, f64)] = &[
    (0.1, 0.9),
    (0.15, 0.85),
    (0.2, 0.8),
    (0.25, 0.75),
    (0.33, 0.67),
    (0.4, 0.6),
];

// Standard-state reaction thermochemistry for the reduced mechanism.
// Enthalpies/entropies at 298.15 K, gas-phase water.
pub const SABATIER_DELTA_H_J_PER_MOL: f64 = -165_000.0;
pub const SABATIER_DELTA_S_J_PER_MOL_K: f64 = -172.7;
// Reverse water-gas shift: CO2 + H2 <=> CO + H2O
pub const RWGS_DELTA_H_J_PER_MOL: f64 = 41_200.0;
pub const RWGS_DELTA_S_J_PER_MOL_K: f64 = 42.3;

/// Consistent per-species chart colors across every figure.
pub static SPECIES_COLORS: Lazy<HashMap<&'static str, Rgb<u8>>> = Lazy::new(|| {
    let mut colors = HashMap::new();
    colors.insert("H2", Rgb([128u8, 0, 128])); // purple
    colors.insert("CO2", Rgb([0u8, 128, 0])); // green
    colors.insert("CH4", Rgb([210u8, 30, 30])); // red
    colors.insert("H2O", Rgb([30u8, 60, 210])); // blue
    colors.insert("CO", Rgb([230u8, 140, 0])); // orange
    colors.insert("N2", Rgb([110u8, 110, 110]));
    colors.insert("Ar", Rgb([0u8, 150, 150]));
    colors.insert("O2", Rgb([150u8, 120, 0]));
    colors
});

pub const DEFAULT_SPECIES_COLOR: Rgb<u8> = Rgb([0u8, 0, 0]);

pub fn species_color(name: &str) -> Rgb<u8> {
    SPECIES_COLORS
        .get(name)
        .copied()
        .unwrap_or(DEFAULT_SPECIES_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn optimal_feed_fractions_sum_to_one() {
        assert_abs_diff_eq!(OPT_X_CO2 + OPT_X_H2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn known_species_have_assigned_colors() {
        for name in ["H2", "CO2", "CH4", "H2O"] {
            assert_ne!(species_color(name), DEFAULT_SPECIES_COLOR);
        }
        assert_eq!(species_color("C2H6"), DEFAULT_SPECIES_COLOR);
    }
}
