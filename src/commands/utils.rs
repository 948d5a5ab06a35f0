use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source Records: {}", report.source_records);
    println!("  Yearly Extremes: {}", report.yearly_extremes.len());
    println!("  Crop Averages: {}", report.crop_averages.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Agro Tables Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source_records: number   - Dataset records summarized");
        println!("  yearly_extremes: array   - Per-year production extremes");
        println!("    year: string           - 4-digit year key");
        println!("    max_crop: string       - Crop with maximum production");
        println!("    min_crop: string       - Crop with minimum production");
        println!("  crop_averages: array     - Per-crop averages");
        println!("    crop: string           - Crop name key");
        println!("    avg_yield: string      - Average yield (Kg/Ha), 3 decimals");
        println!("    avg_area: string       - Average area (Ha), 3 decimals");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Agro Tables v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Summary table generation for agricultural crop production datasets.");
}
