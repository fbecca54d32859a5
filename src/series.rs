//! Per-species series aggregation over a sweep.
//!
//! The table has a fixed schema: every species column is pre-sized to the
//! sweep axis, one `Option<f64>` slot per sweep index. A species that
//! drops below the significance threshold at some point simply leaves that
//! slot `None`, so "below threshold here" is structurally distinct from
//! "shorter series" and no index gaps can form.

use crate::filter::FilteredSpecies;
use crate::sweep_axis::SweepAxis;
use serde::Serialize;

/// One species' column: its name plus one slot per sweep index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesColumn {
    pub name: String,
    pub mole_fractions: Vec<Option<f64>>,
}

/// Aggregated sweep output: the independent-variable axis plus one column
/// per species ever retained by the filter, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesTable {
    pub axis_label: String,
    pub axis_values: Vec<f64>,
    columns: Vec<SpeciesColumn>,
}

impl SpeciesTable {
    pub fn new(axis_label: &str, axis: &SweepAxis) -> Self {
        SpeciesTable {
            axis_label: axis_label.to_string(),
            axis_values: axis.values.clone(),
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.axis_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis_values.is_empty()
    }

    pub fn species_count(&self) -> usize {
        self.columns.len()
    }

    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[SpeciesColumn] {
        &self.columns
    }

    /// Records one sweep point's retained species. A species seen for the
    /// first time gets a fresh all-`None` column before its slot fills.
    /// Slots only fill; there is no removal.
    pub fn record(&mut self, index: usize, retained: &FilteredSpecies) {
        assert!(index < self.axis_values.len(), "sweep index out of range");
        let slots = self.axis_values.len();
        for (name, mole_fraction) in retained {
            let column = match self.columns.iter_mut().find(|c| &c.name == name) {
                Some(column) => column,
                None => {
                    self.columns.push(SpeciesColumn {
                        name: name.clone(),
                        mole_fractions: vec![None; slots],
                    });
                    self.columns.last_mut().unwrap()
                }
            };
            column.mole_fractions[index] = Some(*mole_fraction);
        }
    }

    pub fn column(&self, name: &str) -> Option<&SpeciesColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// (axis value, mole fraction) pairs for one species, skipping the
    /// sweep points where it fell below the threshold.
    pub fn compact_series(&self, name: &str) -> Option<Vec<(f64, f64)>> {
        self.column(name).map(|column| {
            self.axis_values
                .iter()
                .zip(column.mole_fractions.iter())
                .filter_map(|(&x, slot)| slot.map(|y| (x, y)))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep_axis::SweepAxis;
    use more_asserts::assert_le;

    fn table() -> SpeciesTable {
        let axis = SweepAxis::linspace(298.0, 700.0, 4);
        SpeciesTable::new("Temperature (K)", &axis)
    }

    #[test]
    fn columns_keep_fixed_schema() {
        let mut table = table();
        table.record(0, &vec![("CH4".to_string(), 0.4)]);
        table.record(2, &vec![("CH4".to_string(), 0.2), ("CO".to_string(), 0.05)]);
        for column in table.columns() {
            assert_eq!(column.mole_fractions.len(), table.len());
        }
        let ch4 = table.column("CH4").unwrap();
        assert_eq!(ch4.mole_fractions, vec![Some(0.4), None, Some(0.2), None]);
    }

    #[test]
    fn species_appear_in_first_seen_order() {
        let mut table = table();
        table.record(0, &vec![("H2O".to_string(), 0.6)]);
        table.record(1, &vec![("CH4".to_string(), 0.3), ("H2O".to_string(), 0.5)]);
        let names: Vec<&str> = table.species_names().collect();
        assert_eq!(names, ["H2O", "CH4"]);
    }

    #[test]
    fn filled_slot_count_never_exceeds_sweep_length() {
        let mut table = table();
        for i in 0..table.len() {
            table.record(i, &vec![("CH4".to_string(), 0.1 * i as f64)]);
        }
        for column in table.columns() {
            let filled = column.mole_fractions.iter().filter(|s| s.is_some()).count();
            assert_le!(filled, table.len());
        }
    }

    #[test]
    fn compact_series_skips_below_threshold_points() {
        let mut table = table();
        table.record(1, &vec![("CO".to_string(), 0.02)]);
        table.record(3, &vec![("CO".to_string(), 0.04)]);
        let series = table.compact_series("CO").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].1, 0.02);
        assert_eq!(series[1].1, 0.04);
        assert!(table.compact_series("NH3").is_none());
    }

    #[test]
    #[should_panic(expected = "sweep index out of range")]
    fn recording_past_the_axis_panics() {
        let mut table = table();
        table.record(4, &vec![("CH4".to_string(), 0.1)]);
    }
}
