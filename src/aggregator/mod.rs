//! Aggregation of crop records into the two derived summaries.
//!
//! This module transforms normalized records into:
//! - Per-year production extremes (crop with max/min production)
//! - Per-crop averages (yield and cultivation area)
//!
//! Both summaries are built in one forward pass; see [`aggregate`].

pub mod averages;
pub mod extremes;

// Re-export main types and functions
pub use averages::{CropAverage, CropAverages};
pub use extremes::{YearExtremes, YearlyExtreme};

use crate::dataset::CropRecord;
use log::debug;

/// Derive both summaries from a sequence of records
///
/// **Public** - main entry point for aggregation
///
/// A single forward pass feeds both accumulators; the outputs list
/// each distinct year / crop key exactly once, in first-encounter
/// order. Pure function of its input: no shared state, no error
/// conditions, and an empty input yields two empty sequences.
///
/// # Arguments
/// * `records` - Normalized records, in dataset order
///
/// # Returns
/// Tuple of (yearly extremes, crop averages)
pub fn aggregate(records: &[CropRecord]) -> (Vec<YearlyExtreme>, Vec<CropAverage>) {
    debug!("Aggregating {} records", records.len());

    let mut extremes = YearExtremes::new();
    let mut averages = CropAverages::new();

    for record in records {
        extremes.observe(record);
        averages.observe(record);
    }

    let yearly = extremes.finish();
    let per_crop = averages.finish();

    debug!(
        "Aggregated into {} years and {} crops",
        yearly.len(),
        per_crop.len()
    );

    (yearly, per_crop)
}
