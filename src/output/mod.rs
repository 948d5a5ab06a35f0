//! Output for the derived summaries.
//!
//! This module handles presenting aggregation results:
//! - Plain-text tables for stdout
//! - Versioned JSON reports on disk

pub mod json;
pub mod report;
pub mod table;

// Re-export main functions
pub use json::{read_report, write_report};
pub use report::{build_report, SummaryReport};
pub use table::{render_averages_table, render_extremes_table};
