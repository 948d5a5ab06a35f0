//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Loads the dataset from disk
//! 2. Normalizes raw entries into records
//! 3. Aggregates records into the two summaries
//! 4. Prints the tables and/or writes a JSON report

use crate::aggregator::aggregate;
use crate::dataset::{load_dataset, normalize_entries};
use crate::output::{build_report, render_averages_table, render_extremes_table, write_report};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to the dataset JSON file
    pub input: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Suppress table output on stdout
    pub quiet: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("dataset.json"),
            output_json: None,
            quiet: false,
        }
    }
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Summarize command arguments
///
/// # Returns
/// Ok if summarization succeeds, Err with context if any step fails
///
/// # Errors
/// * Dataset read or parse failures
/// * Report write failures
pub fn execute_summarize(args: SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Summarizing dataset: {}", args.input.display());

    // Step 1: Load dataset
    info!("Step 1/4: Loading dataset...");
    let entries = load_dataset(&args.input).context("Failed to load dataset")?;

    debug!("Loaded {} entries", entries.len());

    // Step 2: Normalize entries
    info!("Step 2/4: Normalizing entries...");
    let records = normalize_entries(&entries);

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating records...");
    let (yearly_extremes, crop_averages) = aggregate(&records);

    debug!(
        "Derived {} yearly extremes, {} crop averages",
        yearly_extremes.len(),
        crop_averages.len()
    );

    // Step 4: Emit output
    info!("Step 4/4: Writing output...");

    if !args.quiet {
        println!("Yearly Crop Production Extremes");
        println!("{}", render_extremes_table(&yearly_extremes));
        println!("Crop Averages");
        println!("{}", render_averages_table(&crop_averages));
    }

    if let Some(json_path) = &args.output_json {
        let report = build_report(records.len(), yearly_extremes, crop_averages);

        write_report(&report, json_path).context("Failed to write report JSON")?;

        info!("✓ Report written to: {}", json_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Summarize completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    if let Some(output) = &args.output_json {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid() {
        let file = write_temp_dataset("[]");
        let args = SummarizeArgs {
            input: file.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = SummarizeArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = SummarizeArgs {
            input: PathBuf::from("/nonexistent/dataset.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_input_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = SummarizeArgs {
            input: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let file = write_temp_dataset("[]");
        let args = SummarizeArgs {
            input: file.path().to_path_buf(),
            output_json: Some(PathBuf::new()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_summarize_writes_report() {
        let file = write_temp_dataset(
            r#"[
                {
                    "Country": "India",
                    "Year": "Financial Year (Apr - Mar), 2019",
                    "Crop Name": "Rice",
                    "Crop Production (UOM:t(Tonnes))": 100,
                    "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))": 20,
                    "Area Under Cultivation (UOM:Ha(Hectares))": 5
                }
            ]"#,
        );
        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("report.json");

        let args = SummarizeArgs {
            input: file.path().to_path_buf(),
            output_json: Some(out_path.clone()),
            quiet: true,
        };

        execute_summarize(args).unwrap();

        let report = crate::output::read_report(&out_path).unwrap();
        assert_eq!(report.source_records, 1);
        assert_eq!(report.yearly_extremes.len(), 1);
        assert_eq!(report.yearly_extremes[0].year, "2019");
        assert_eq!(report.crop_averages[0].avg_yield, "20.000");
    }
}
