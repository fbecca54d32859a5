//! Equilibrium oracle contract. The sweep engine treats the solver as an
//! opaque collaborator: given an `EquilibriumQuery` it returns the
//! equilibrated species mole fractions for the whole mechanism, or fails.

use crate::mixture::EquilibriumQuery;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquilibriumError {
    /// The solver found no feasible equilibrium for this state. Fatal for
    /// the whole sweep; drivers do not retry or salvage partial results.
    #[error("equilibrium solve failed to converge at T={temperature_k} K, P={pressure_pa} Pa")]
    NonConvergence { temperature_k: f64, pressure_pa: f64 },

    #[error("species '{0}' is not part of the mechanism")]
    UnknownSpecies(String),

    #[error("initial composition is empty or sums to zero")]
    EmptyComposition,
}

/// Post-equilibration species vector: mechanism species names with
/// index-aligned mole fractions, including near-zero entries. Fractions
/// are non-negative and sum to 1 within solver tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilibriumResult {
    pub species_names: Vec<String>,
    pub mole_fractions: Vec<f64>,
}

impl EquilibriumResult {
    pub fn new(species_names: Vec<String>, mole_fractions: Vec<f64>) -> Self {
        debug_assert_eq!(species_names.len(), mole_fractions.len());
        EquilibriumResult {
            species_names,
            mole_fractions,
        }
    }

    pub fn len(&self) -> usize {
        self.species_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species_names.is_empty()
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species_names.iter().position(|n| n == name)
    }

    pub fn mole_fraction(&self, name: &str) -> Option<f64> {
        self.species_index(name).map(|i| self.mole_fractions[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.species_names
            .iter()
            .map(String::as_str)
            .zip(self.mole_fractions.iter().copied())
    }
}

/// "Equilibrate holding T and P fixed" collaborator contract.
pub trait EquilibriumOracle {
    /// The mechanism's full species list, in result order.
    fn species_names(&self) -> &[String];

    fn species_index(&self, name: &str) -> Option<usize> {
        self.species_names().iter().position(|n| n == name)
    }

    /// Drive the queried mixture to equilibrium at the query's fixed
    /// temperature and pressure.
    fn equilibrate_tp(&self, query: &EquilibriumQuery) -> Result<EquilibriumResult, EquilibriumError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> EquilibriumResult {
        EquilibriumResult::new(
            vec!["H2".to_string(), "CO2".to_string(), "CH4".to_string()],
            vec![0.1, 0.2, 0.7],
        )
    }

    #[test]
    fn species_index_matches_result_order() {
        let result = result();
        assert_eq!(result.species_index("CH4"), Some(2));
        assert_eq!(result.species_index("H2O"), None);
    }

    #[test]
    fn mole_fraction_lookup_by_name() {
        let result = result();
        assert_eq!(result.mole_fraction("CO2"), Some(0.2));
        assert_eq!(result.mole_fraction("Ar"), None);
    }

    #[test]
    fn iter_pairs_stay_index_aligned() {
        let result = result();
        let pairs: Vec<(&str, f64)> = result.iter().collect();
        assert_eq!(pairs, vec![("H2", 0.1), ("CO2", 0.2), ("CH4", 0.7)]);
    }
}
