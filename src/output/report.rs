//! Output JSON schema definitions for summary reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{CropAverage, YearlyExtreme};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level summary report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of dataset records the summaries were derived from
    pub source_records: usize,

    /// Per-year production extremes, in first-encounter order
    pub yearly_extremes: Vec<YearlyExtreme>,

    /// Per-crop averages, in first-encounter order
    pub crop_averages: Vec<CropAverage>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Assemble a report from aggregation output
///
/// **Public** - used by commands to create final output
pub fn build_report(
    source_records: usize,
    yearly_extremes: Vec<YearlyExtreme>,
    crop_averages: Vec<CropAverage>,
) -> SummaryReport {
    use chrono::Utc;

    SummaryReport {
        version: SCHEMA_VERSION.to_string(),
        source_records,
        yearly_extremes,
        crop_averages,
        generated_at: Utc::now().to_rfc3339(),
    }
}
