//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod summarize;
pub mod utils;

// Re-export main command functions
pub use summarize::{execute_summarize, validate_args, SummarizeArgs};
pub use utils::{display_schema, display_version, validate_report_file};
