//! Plain-text table rendering for the two summaries.
//!
//! Renders aligned, fixed-header tables for stdout. Column widths
//! fit the widest cell; an empty summary renders a single
//! "No data available" row spanning all columns.

use crate::aggregator::{CropAverage, YearlyExtreme};
use crate::utils::config::{AVERAGES_HEADERS, EXTREMES_HEADERS, NO_DATA_PLACEHOLDER};

/// Render the yearly extremes table
///
/// **Public** - Table 1: Year | Crop with Max Production | Crop with Min Production
pub fn render_extremes_table(rows: &[YearlyExtreme]) -> String {
    let cells: Vec<[&str; 3]> = rows
        .iter()
        .map(|r| [r.year.as_str(), r.max_crop.as_str(), r.min_crop.as_str()])
        .collect();

    render_table(&EXTREMES_HEADERS, &cells)
}

/// Render the crop averages table
///
/// **Public** - Table 2: Crop | Average Yield (Kg/Ha) | Average Area (Ha)
pub fn render_averages_table(rows: &[CropAverage]) -> String {
    let cells: Vec<[&str; 3]> = rows
        .iter()
        .map(|r| [r.crop.as_str(), r.avg_yield.as_str(), r.avg_area.as_str()])
        .collect();

    render_table(&AVERAGES_HEADERS, &cells)
}

/// Render a three-column table with aligned cells
///
/// **Private** - shared by both table renderers
fn render_table(headers: &[&str; 3], rows: &[[&str; 3]]) -> String {
    // Column widths fit the widest cell, header included
    let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    push_separator(&mut out, &widths);

    if rows.is_empty() {
        // Single placeholder row spanning all columns
        let total = widths.iter().sum::<usize>() + 2 * SEPARATOR.len();
        out.push_str(&format!(
            "{:^total$}\n",
            NO_DATA_PLACEHOLDER,
            total = total.max(NO_DATA_PLACEHOLDER.len())
        ));
    } else {
        for row in rows {
            push_row(&mut out, row, &widths);
        }
    }

    out
}

const SEPARATOR: &str = " | ";

/// Append one padded row
///
/// **Private** - internal helper for render_table
fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "{:<w0$}{sep}{:<w1$}{sep}{:<w2$}\n",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        sep = SEPARATOR,
    ));
}

/// Append the header/body separator line
///
/// **Private** - internal helper for render_table
fn push_separator(out: &mut String, widths: &[usize; 3]) {
    let total = widths.iter().sum::<usize>() + 2 * SEPARATOR.len();
    out.push_str(&"-".repeat(total));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_extremes_table() {
        let rows = vec![
            YearlyExtreme {
                year: "2019".to_string(),
                max_crop: "Rice".to_string(),
                min_crop: "Barley".to_string(),
            },
            YearlyExtreme {
                year: "2020".to_string(),
                max_crop: "Wheat".to_string(),
                min_crop: "Wheat".to_string(),
            },
        ];

        let table = render_extremes_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Year"));
        assert!(lines[0].contains("Crop with Max Production"));
        assert!(lines[0].contains("Crop with Min Production"));
        assert!(lines[2].contains("2019"));
        assert!(lines[2].contains("Rice"));
        assert!(lines[3].contains("2020"));
    }

    #[test]
    fn test_render_averages_table() {
        let rows = vec![CropAverage {
            crop: "Rice".to_string(),
            avg_yield: "17.920".to_string(),
            avg_area: "0.570".to_string(),
        }];

        let table = render_averages_table(&rows);

        assert!(table.contains("Average Yield (Kg/Ha)"));
        assert!(table.contains("Average Area (Ha)"));
        assert!(table.contains("17.920"));
    }

    #[test]
    fn test_empty_summary_shows_placeholder() {
        let table = render_extremes_table(&[]);
        assert!(table.contains("No data available"));

        let table = render_averages_table(&[]);
        assert!(table.contains("No data available"));
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let rows = vec![YearlyExtreme {
            year: "2019".to_string(),
            max_crop: "A crop with a very long name indeed".to_string(),
            min_crop: "B".to_string(),
        }];

        let table = render_extremes_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        // Header, separator, and body rows end up the same width
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[2].len(), lines[1].len());
    }
}
