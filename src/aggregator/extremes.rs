//! Per-year production extremes.
//!
//! For every distinct year key, tracks the crop with the highest and
//! lowest production seen so far. Comparison is strict, so the first
//! record to reach a production value keeps the title on ties.

use crate::dataset::CropRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the yearly extremes table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyExtreme {
    /// 4-digit year key (or "0" placeholder)
    pub year: String,

    /// Crop with the maximum production in that year
    pub max_crop: String,

    /// Crop with the minimum production in that year
    pub min_crop: String,
}

/// Running max/min state for a single year
#[derive(Debug, Clone)]
struct YearState {
    year: String,
    max_crop: String,
    max_production: f64,
    min_crop: String,
    min_production: f64,
}

/// Accumulator for per-year production extremes
///
/// **Public** - fed record-by-record by `aggregate`
///
/// Keeps entries in first-encounter order of the year key via a
/// Vec-of-states plus a key index.
#[derive(Debug, Default)]
pub struct YearExtremes {
    states: Vec<YearState>,
    index: HashMap<String, usize>,
}

impl YearExtremes {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the accumulator
    ///
    /// The first record of a year seeds both extremes with itself;
    /// later records only replace a holder on strict improvement.
    pub fn observe(&mut self, record: &CropRecord) {
        match self.index.get(&record.year) {
            Some(&i) => {
                let state = &mut self.states[i];
                if record.production > state.max_production {
                    state.max_crop = record.crop.clone();
                    state.max_production = record.production;
                }
                if record.production < state.min_production {
                    state.min_crop = record.crop.clone();
                    state.min_production = record.production;
                }
            }
            None => {
                self.index.insert(record.year.clone(), self.states.len());
                self.states.push(YearState {
                    year: record.year.clone(),
                    max_crop: record.crop.clone(),
                    max_production: record.production,
                    min_crop: record.crop.clone(),
                    min_production: record.production,
                });
            }
        }
    }

    /// Project the accumulated state into output rows
    pub fn finish(self) -> Vec<YearlyExtreme> {
        self.states
            .into_iter()
            .map(|state| YearlyExtreme {
                year: state.year,
                max_crop: state.max_crop,
                min_crop: state.min_crop,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, crop: &str, production: f64) -> CropRecord {
        CropRecord {
            year: year.to_string(),
            crop: crop.to_string(),
            production,
            yield_per_ha: 0.0,
            area: 0.0,
        }
    }

    fn run(records: &[CropRecord]) -> Vec<YearlyExtreme> {
        let mut acc = YearExtremes::new();
        for r in records {
            acc.observe(r);
        }
        acc.finish()
    }

    #[test]
    fn test_single_record_year() {
        let rows = run(&[record("1999", "Rice", 12.0)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, "1999");
        assert_eq!(rows[0].max_crop, "Rice");
        assert_eq!(rows[0].min_crop, "Rice");
    }

    #[test]
    fn test_max_and_min_tracking() {
        let rows = run(&[
            record("1999", "Rice", 12.0),
            record("1999", "Wheat", 30.0),
            record("1999", "Barley", 3.0),
        ]);

        assert_eq!(rows[0].max_crop, "Wheat");
        assert_eq!(rows[0].min_crop, "Barley");
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let rows = run(&[
            record("2005", "Rice", 10.0),
            record("2005", "Wheat", 10.0),
        ]);

        // Equal production never replaces the existing holder
        assert_eq!(rows[0].max_crop, "Rice");
        assert_eq!(rows[0].min_crop, "Rice");
    }

    #[test]
    fn test_zero_production_can_be_min() {
        let rows = run(&[
            record("2005", "Rice", 10.0),
            record("2005", "Unknown", 0.0),
        ]);

        assert_eq!(rows[0].max_crop, "Rice");
        assert_eq!(rows[0].min_crop, "Unknown");
    }

    #[test]
    fn test_years_in_encounter_order() {
        let rows = run(&[
            record("2003", "Rice", 1.0),
            record("2001", "Rice", 1.0),
            record("2002", "Rice", 1.0),
            record("2001", "Wheat", 2.0),
        ]);

        let order: Vec<&str> = rows.iter().map(|r| r.year.as_str()).collect();
        assert_eq!(order, vec!["2003", "2001", "2002"]);
    }
}
