//! Dataset file loading.
//!
//! Reads the full dataset from a JSON file into memory. The
//! aggregation core never performs I/O itself; this is the only
//! input boundary.

use super::schema::DatasetEntry;
use crate::utils::error::DatasetError;
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a dataset from a JSON file
///
/// **Public** - main entry point for dataset input
///
/// The file must contain a JSON array. Entries that are not objects
/// are skipped with a warning rather than failing the load; malformed
/// fields inside an entry are handled later by normalization.
///
/// # Arguments
/// * `path` - Path to the dataset JSON file
///
/// # Returns
/// All entries of the dataset, in file order
///
/// # Errors
/// * `DatasetError::ReadFailed` - File cannot be opened or read
/// * `DatasetError::JsonError` - File is not valid JSON
/// * `DatasetError::InvalidFormat` - Top-level value is not an array
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<DatasetEntry>, DatasetError> {
    let path = path.as_ref();

    debug!("Loading dataset from: {}", path.display());

    let file = File::open(path).map_err(DatasetError::ReadFailed)?;
    let reader = BufReader::new(file);

    let raw: serde_json::Value = serde_json::from_reader(reader)?;

    let entries = match raw {
        serde_json::Value::Array(items) => parse_entries(&items),
        _ => {
            return Err(DatasetError::InvalidFormat(
                "Dataset must be a JSON array of records".to_string(),
            ))
        }
    };

    debug!("Loaded {} dataset entries", entries.len());

    Ok(entries)
}

/// Parse an array of raw JSON values into dataset entries
///
/// **Private** - internal parsing logic
fn parse_entries(items: &[serde_json::Value]) -> Vec<DatasetEntry> {
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<DatasetEntry>(item.clone()) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                // Log but don't fail - some entries may be malformed
                warn!("Skipping entry {}: {}", index, e);
            }
        }
    }

    entries
}
