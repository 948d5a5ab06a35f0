//! Agro Tables
//!
//! Summary table generation for agricultural crop production datasets.
//!
//! This crate provides the core implementation for the `agro-tables`
//! CLI tool: it loads a flat JSON dataset of yearly per-crop
//! production records and derives two summaries in a single pass —
//! the crop with maximum and minimum production per year, and the
//! average yield and cultivation area per crop.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install agro-tables
//! agro-tables --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod utils;
