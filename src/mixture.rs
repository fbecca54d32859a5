//! Mixture state configuration. Each sweep point builds an immutable
//! `EquilibriumQuery` value rather than mutating a shared gas object, so
//! no state leaks between iterations.

use crate::sweep_axis::MolarRatioPoint;
use serde::Serialize;

/// One equilibration request: fixed temperature and pressure plus the
/// initial composition as an ordered species-name -> mole-fraction list.
/// Fractions need not sum to 1; the oracle normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilibriumQuery {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub composition: Vec<(String, f64)>,
}

impl EquilibriumQuery {
    pub fn new(temperature_k: f64, pressure_pa: f64) -> Self {
        EquilibriumQuery {
            temperature_k,
            pressure_pa,
            composition: Vec::new(),
        }
    }

    pub fn with_species(mut self, name: &str, mole_fraction: f64) -> Self {
        self.composition.push((name.to_string(), mole_fraction));
        self
    }

    pub fn with_composition(mut self, composition: Vec<(String, f64)>) -> Self {
        self.composition = composition;
        self
    }

    /// The standard two-reactant Sabatier feed.
    pub fn co2_h2_feed(temperature_k: f64, pressure_pa: f64, ratio: MolarRatioPoint) -> Self {
        EquilibriumQuery::new(temperature_k, pressure_pa)
            .with_species("CO2", ratio.x_co2)
            .with_species("H2", ratio.x_h2)
    }

    pub fn total_fraction(&self) -> f64 {
        self.composition.iter().map(|(_, x)| x).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn co2_h2_feed_carries_both_reactants() {
        let ratio = MolarRatioPoint::from_co2(0.2);
        let query = EquilibriumQuery::co2_h2_feed(673.15, 500_000.0, ratio);
        assert_eq!(query.composition.len(), 2);
        assert_eq!(query.composition[0].0, "CO2");
        assert_eq!(query.composition[1].0, "H2");
        assert_abs_diff_eq!(query.total_fraction(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn builder_appends_in_order() {
        let query = EquilibriumQuery::new(300.0, 100_000.0)
            .with_species("H2", 0.5)
            .with_species("CO2", 0.3)
            .with_species("N2", 0.2);
        let names: Vec<&str> = query.composition.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["H2", "CO2", "N2"]);
    }
}
