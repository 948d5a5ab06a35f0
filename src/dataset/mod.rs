//! Dataset loading and normalization.
//!
//! This module handles:
//! - Deserializing the raw JSON dataset from disk
//! - Normalizing raw entries into clean records
//! - Defining the input schema

pub mod loader;
pub mod normalize;
pub mod schema;

// Re-export main types and functions
pub use loader::load_dataset;
pub use normalize::{extract_year, normalize_entries, numeric_or_zero};
pub use schema::{CropRecord, DatasetEntry};
