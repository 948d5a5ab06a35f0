//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Placeholder key used when a record has no 4-digit year or no crop
/// name. Kept for compatibility with the source dataset's conventions
/// even though it conflates "missing" with a literal "0" key.
pub const MISSING_KEY_PLACEHOLDER: &str = "0";

/// Number of decimal places used when formatting averages
pub const AVG_DECIMAL_PLACES: usize = 3;

/// Row shown by the table renderer when a summary is empty
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

// Fixed column headers for the two rendered tables
pub const EXTREMES_HEADERS: [&str; 3] = [
    "Year",
    "Crop with Max Production",
    "Crop with Min Production",
];
pub const AVERAGES_HEADERS: [&str; 3] = [
    "Crop",
    "Average Yield (Kg/Ha)",
    "Average Area (Ha)",
];
