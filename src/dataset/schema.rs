//! Input schema definitions for the agricultural dataset.
//!
//! The source dataset uses verbose column names that embed the unit
//! of measure, and mixes JSON numbers, numeric strings, and empty
//! strings in its numeric columns. `DatasetEntry` mirrors that raw
//! shape; `CropRecord` is the cleaned form the aggregator consumes.

use serde::Deserialize;
use serde_json::Value;

/// One raw entry of the dataset as it appears on disk
///
/// Every field defaults when absent so that partial records
/// deserialize instead of failing the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetEntry {
    /// Country the measurement was taken in (unused by aggregation)
    #[serde(default, rename = "Country")]
    pub country: String,

    /// Free-form year field, e.g. "Financial Year (Apr - Mar), 2019"
    #[serde(default, rename = "Year")]
    pub year: String,

    /// Crop name, may be empty
    #[serde(default, rename = "Crop Name")]
    pub crop_name: String,

    /// Production in tonnes; number, numeric string, or ""
    #[serde(default, rename = "Crop Production (UOM:t(Tonnes))")]
    pub production: Value,

    /// Yield in kg per hectare; number, numeric string, or ""
    #[serde(default, rename = "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))")]
    pub yield_per_hectare: Value,

    /// Area under cultivation in hectares; number, numeric string, or ""
    #[serde(default, rename = "Area Under Cultivation (UOM:Ha(Hectares))")]
    pub area_under_cultivation: Value,
}

/// Cleaned record consumed by the aggregator
///
/// **Public** - produced by normalization, input to `aggregate`
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecord {
    /// 4-digit year key, or "0" when the raw field had no 4-digit run
    pub year: String,

    /// Crop name key, or "0" when the raw field was empty
    pub crop: String,

    /// Production in tonnes, 0.0 when unparseable
    pub production: f64,

    /// Yield in kg/ha, 0.0 when unparseable
    pub yield_per_ha: f64,

    /// Area in hectares, 0.0 when unparseable
    pub area: f64,
}
