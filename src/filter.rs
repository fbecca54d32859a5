//! Significance filtering of equilibrium results.

use crate::oracle::EquilibriumResult;

/// Species retained by a significance filter, in mechanism order.
pub type FilteredSpecies = Vec<(String, f64)>;

/// Keeps the entries whose mole fraction is strictly greater than
/// `epsilon`. A fraction exactly equal to the threshold is excluded.
/// Ordering is inherited from the result; the result is never mutated.
pub fn filter_significant(result: &EquilibriumResult, epsilon: f64) -> FilteredSpecies {
    result
        .iter()
        .filter(|(_, x)| *x > epsilon)
        .map(|(name, x)| (name.to_string(), x))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAJOR_SPECIES_EPSILON;
    use crate::oracle::EquilibriumResult;

    fn sample() -> EquilibriumResult {
        EquilibriumResult::new(
            vec![
                "CO2".to_string(),
                "H2".to_string(),
                "CH4".to_string(),
                "H2O".to_string(),
            ],
            vec![0.05, 0.05, 0.30, 0.60],
        )
    }

    #[test]
    fn coarse_threshold_keeps_all_four() {
        let kept = filter_significant(&sample(), MAJOR_SPECIES_EPSILON);
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn tighter_threshold_keeps_only_products() {
        let kept = filter_significant(&sample(), 0.10);
        let names: Vec<&str> = kept.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["CH4", "H2O"]);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        let result = EquilibriumResult::new(
            vec!["CO".to_string(), "CH4".to_string()],
            vec![0.01, 0.01 + 1e-12],
        );
        let kept = filter_significant(&result, 0.01);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "CH4");
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let once = filter_significant(&sample(), MAJOR_SPECIES_EPSILON);
        let twice = filter_significant(&sample(), MAJOR_SPECIES_EPSILON);
        assert_eq!(once, twice);
    }

    #[test]
    fn ordering_follows_the_mechanism() {
        let kept = filter_significant(&sample(), 0.0);
        let names: Vec<&str> = kept.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["CO2", "H2", "CH4", "H2O"]);
    }
}
