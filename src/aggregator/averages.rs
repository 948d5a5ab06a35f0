//! Per-crop yield and area averages.
//!
//! For every distinct crop name, accumulates total yield, total area
//! and record count, then projects arithmetic means formatted to
//! three decimal places.

use crate::dataset::CropRecord;
use crate::utils::config::AVG_DECIMAL_PLACES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the crop averages table
///
/// Averages are carried as fixed 3-decimal strings (e.g. "20.000"),
/// which is the form both the table renderer and the JSON report
/// emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropAverage {
    /// Crop name key (or "0" placeholder)
    pub crop: String,

    /// Average yield in kg/ha, formatted to 3 decimal places
    pub avg_yield: String,

    /// Average cultivation area in hectares, formatted to 3 decimal places
    pub avg_area: String,
}

/// Running totals for a single crop
#[derive(Debug, Clone)]
struct CropState {
    crop: String,
    total_yield: f64,
    total_area: f64,
    count: u64,
}

/// Accumulator for per-crop averages
///
/// **Public** - fed record-by-record by `aggregate`
///
/// Keeps entries in first-encounter order of the crop key via a
/// Vec-of-states plus a key index. Totals only ever grow; count
/// starts at 1 on first sighting.
#[derive(Debug, Default)]
pub struct CropAverages {
    states: Vec<CropState>,
    index: HashMap<String, usize>,
}

impl CropAverages {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the accumulator
    pub fn observe(&mut self, record: &CropRecord) {
        match self.index.get(&record.crop) {
            Some(&i) => {
                let state = &mut self.states[i];
                state.total_yield += record.yield_per_ha;
                state.total_area += record.area;
                state.count += 1;
            }
            None => {
                self.index.insert(record.crop.clone(), self.states.len());
                self.states.push(CropState {
                    crop: record.crop.clone(),
                    total_yield: record.yield_per_ha,
                    total_area: record.area,
                    count: 1,
                });
            }
        }
    }

    /// Project the accumulated state into output rows
    pub fn finish(self) -> Vec<CropAverage> {
        self.states
            .into_iter()
            .map(|state| {
                let count = state.count as f64;
                CropAverage {
                    crop: state.crop,
                    avg_yield: format!(
                        "{:.prec$}",
                        state.total_yield / count,
                        prec = AVG_DECIMAL_PLACES
                    ),
                    avg_area: format!(
                        "{:.prec$}",
                        state.total_area / count,
                        prec = AVG_DECIMAL_PLACES
                    ),
                }
            })
            .collect()
    }
}
