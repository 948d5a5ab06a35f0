//! Normalization of raw dataset entries into clean records.
//!
//! The derivation rules here are deliberately forgiving: malformed
//! or missing fields never fail, they degrade to zero values ("0"
//! for keys, 0.0 for numerics). This conflates genuinely-missing
//! data with a literal "0" key, which matches the source dataset's
//! conventions but is worth knowing about when reading output.

use super::schema::{CropRecord, DatasetEntry};
use crate::utils::config::MISSING_KEY_PLACEHOLDER;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}").expect("static year pattern is valid"));

/// Normalize raw entries into records ready for aggregation
///
/// **Public** - main entry point for normalization
///
/// Infallible: every entry produces exactly one record, in input
/// order.
pub fn normalize_entries(entries: &[DatasetEntry]) -> Vec<CropRecord> {
    debug!("Normalizing {} dataset entries", entries.len());

    entries.iter().map(normalize_entry).collect()
}

/// Normalize a single entry
///
/// **Private** - internal helper for normalize_entries
fn normalize_entry(entry: &DatasetEntry) -> CropRecord {
    let crop = if entry.crop_name.is_empty() {
        MISSING_KEY_PLACEHOLDER.to_string()
    } else {
        entry.crop_name.clone()
    };

    CropRecord {
        year: extract_year(&entry.year),
        crop,
        production: numeric_or_zero(&entry.production),
        yield_per_ha: numeric_or_zero(&entry.yield_per_hectare),
        area: numeric_or_zero(&entry.area_under_cultivation),
    }
}

/// Extract the year key from a free-form year field
///
/// **Public** - also used directly by tests
///
/// Takes the first run of 4 consecutive digits (e.g. "2019" out of
/// "Financial Year (Apr - Mar), 2019"). Fields without a 4-digit run
/// fall back to the "0" placeholder key.
pub fn extract_year(raw: &str) -> String {
    YEAR_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| MISSING_KEY_PLACEHOLDER.to_string())
}

/// Coerce a raw JSON value into a finite f64, defaulting to 0.0
///
/// **Public** - also used directly by tests
///
/// Accepts JSON numbers as-is and strings that parse as f64. Anything
/// else (null, empty string, non-numeric text, NaN/infinity) becomes
/// 0.0.
pub fn numeric_or_zero(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
