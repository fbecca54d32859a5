//! Reduced-mechanism equilibrium oracle for the Sabatier system.
//!
//! Covers H2, CO2, CH4, H2O, CO plus the inert background species N2, Ar,
//! and O2. Two gas-phase equilibria are solved:
//!
//!   CO2 + 4 H2 <=> CH4 + 2 H2O   (Sabatier, delta_n = -2)
//!   CO2 +   H2 <=> CO  +   H2O   (reverse water-gas shift, delta_n = 0)
//!
//! Equilibrium constants come from van 't Hoff standard-state enthalpy and
//! entropy; each reaction extent is solved by bisection on ln Q - ln K and
//! the two reactions are relaxed alternately until both extents vanish.
//! This is a coarse stand-in for a full mechanism solver, adequate for
//! reactor envelope screening; O2 is treated as inert at Sabatier
//! conditions.

use crate::constants::{
    GAS_CONSTANT_J_PER_MOL_K, RWGS_DELTA_H_J_PER_MOL, RWGS_DELTA_S_J_PER_MOL_K,
    SABATIER_DELTA_H_J_PER_MOL, SABATIER_DELTA_S_J_PER_MOL_K, STANDARD_PRESSURE_PA,
};
use crate::mixture::EquilibriumQuery;
use crate::oracle::{EquilibriumError, EquilibriumOracle, EquilibriumResult};

const MECHANISM_SPECIES: &[&str] = &["H2", "CO2", "CH4", "H2O", "CO", "N2", "Ar", "O2"];

// Mole floor used when evaluating ln Q near depletion
const MOLE_FLOOR: f64 = 1e-30;
// Extent kept clear of the depletion boundary
const EXTENT_MARGIN: f64 = 1e-12;

/// One gas-phase equilibrium: signed stoichiometry over mechanism indices
/// plus standard-state reaction enthalpy and entropy.
struct Reaction {
    stoich: &'static [(usize, f64)],
    delta_n: f64,
    delta_h: f64,
    delta_s: f64,
}

impl Reaction {
    /// ln of the mole-fraction equilibrium constant at (T, P):
    /// ln Kx = -dG/(RT) - delta_n * ln(P/P0).
    fn ln_kx(&self, temperature_k: f64, pressure_pa: f64) -> f64 {
        let delta_g = self.delta_h - temperature_k * self.delta_s;
        let ln_kp = -delta_g / (GAS_CONSTANT_J_PER_MOL_K * temperature_k);
        ln_kp - self.delta_n * (pressure_pa / STANDARD_PRESSURE_PA).ln()
    }

    /// ln of the mole-fraction reaction quotient for the current moles.
    fn ln_qx(&self, moles: &[f64], total: f64) -> f64 {
        self.stoich
            .iter()
            .map(|&(i, nu)| nu * (moles[i].max(MOLE_FLOOR) / total).ln())
            .sum()
    }

    /// Largest forward extent that keeps every reactant non-negative.
    fn forward_limit(&self, moles: &[f64]) -> f64 {
        self.stoich
            .iter()
            .filter(|&&(_, nu)| nu < 0.0)
            .map(|&(i, nu)| moles[i] / -nu)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest reverse extent that keeps every product non-negative.
    fn reverse_limit(&self, moles: &[f64]) -> f64 {
        self.stoich
            .iter()
            .filter(|&&(_, nu)| nu > 0.0)
            .map(|&(i, nu)| moles[i] / nu)
            .fold(f64::INFINITY, f64::min)
    }

    fn apply(&self, moles: &mut [f64], total: &mut f64, extent: f64) {
        for &(i, nu) in self.stoich {
            moles[i] = (moles[i] + nu * extent).max(0.0);
        }
        *total += self.delta_n * extent;
    }

    /// Extent that brings this reaction to equilibrium for the current
    /// moles, found by bisection. ln Q - ln Kx is monotone increasing in
    /// the extent, so the root is unique within the feasible range.
    fn solve_extent(&self, moles: &[f64], total: f64, ln_kx: f64) -> f64 {
        let mut lo = -(self.reverse_limit(moles) - EXTENT_MARGIN).max(0.0);
        let mut hi = (self.forward_limit(moles) - EXTENT_MARGIN).max(0.0);
        if hi <= lo {
            return 0.0;
        }

        let residual = |extent: f64| {
            let mut trial = moles.to_vec();
            let mut trial_total = total;
            self.apply(&mut trial, &mut trial_total, extent);
            self.ln_qx(&trial, trial_total) - ln_kx
        };

        if residual(lo) >= 0.0 {
            return lo;
        }
        if residual(hi) <= 0.0 {
            return hi;
        }
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if residual(mid) < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

const SABATIER: Reaction = Reaction {
    // CO2 + 4 H2 -> CH4 + 2 H2O
    stoich: &[(1, -1.0), (0, -4.0), (2, 1.0), (3, 2.0)],
    delta_n: -2.0,
    delta_h: SABATIER_DELTA_H_J_PER_MOL,
    delta_s: SABATIER_DELTA_S_J_PER_MOL_K,
};

const RWGS: Reaction = Reaction {
    // CO2 + H2 -> CO + H2O
    stoich: &[(1, -1.0), (0, -1.0), (4, 1.0), (3, 1.0)],
    delta_n: 0.0,
    delta_h: RWGS_DELTA_H_J_PER_MOL,
    delta_s: RWGS_DELTA_S_J_PER_MOL_K,
};

pub struct SabatierOracle {
    species: Vec<String>,
    max_outer_iterations: usize,
    extent_tolerance: f64,
}

impl SabatierOracle {
    pub fn new() -> Self {
        SabatierOracle {
            species: MECHANISM_SPECIES.iter().map(|s| s.to_string()).collect(),
            max_outer_iterations: 500,
            extent_tolerance: 1e-12,
        }
    }

    /// Initial moles aligned to the mechanism, normalized to 1 mol total.
    fn initial_moles(&self, query: &EquilibriumQuery) -> Result<Vec<f64>, EquilibriumError> {
        let mut moles = vec![0.0; self.species.len()];
        for (name, fraction) in &query.composition {
            let index = self
                .species_index(name)
                .ok_or_else(|| EquilibriumError::UnknownSpecies(name.clone()))?;
            moles[index] += fraction;
        }
        let total: f64 = moles.iter().sum();
        if total <= 0.0 {
            return Err(EquilibriumError::EmptyComposition);
        }
        for n in &mut moles {
            *n /= total;
        }
        Ok(moles)
    }
}

impl Default for SabatierOracle {
    fn default() -> Self {
        SabatierOracle::new()
    }
}

impl EquilibriumOracle for SabatierOracle {
    fn species_names(&self) -> &[String] {
        &self.species
    }

    fn equilibrate_tp(
        &self,
        query: &EquilibriumQuery,
    ) -> Result<EquilibriumResult, EquilibriumError> {
        if query.temperature_k <= 0.0 || query.pressure_pa <= 0.0 {
            return Err(EquilibriumError::NonConvergence {
                temperature_k: query.temperature_k,
                pressure_pa: query.pressure_pa,
            });
        }

        let mut moles = self.initial_moles(query)?;
        let mut total = 1.0;
        let ln_kx_sabatier = SABATIER.ln_kx(query.temperature_k, query.pressure_pa);
        let ln_kx_rwgs = RWGS.ln_kx(query.temperature_k, query.pressure_pa);

        let mut converged = false;
        for _ in 0..self.max_outer_iterations {
            let mut max_extent: f64 = 0.0;
            for (reaction, ln_kx) in [(&SABATIER, ln_kx_sabatier), (&RWGS, ln_kx_rwgs)] {
                let extent = reaction.solve_extent(&moles, total, ln_kx);
                reaction.apply(&mut moles, &mut total, extent);
                max_extent = max_extent.max(extent.abs());
            }
            if max_extent < self.extent_tolerance {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(EquilibriumError::NonConvergence {
                temperature_k: query.temperature_k,
                pressure_pa: query.pressure_pa,
            });
        }

        let fractions: Vec<f64> = moles.iter().map(|n| (n / total).max(0.0)).collect();
        Ok(EquilibriumResult::new(self.species.clone(), fractions))
    }
}
