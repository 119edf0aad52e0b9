//! Table row types and ASCII table formatting for the report
//!
//! This module provides:
//! - [`FrequencyEntry`] rows for value/count/percentage listings
//! - [`MismatchEntry`] rows for inconsistent respondents
//! - ASCII table formatting using the [`tabled`] crate

use tabled::{Table, Tabled};
use think_stats::prelude::*;

/// A single value with its count and share of all observations
#[derive(Debug, Clone, Tabled)]
pub struct FrequencyEntry {
    /// The observed value
    #[tabled(rename = "Value")]
    pub value: String,

    /// Number of times the value was observed
    #[tabled(rename = "Count")]
    pub count: u64,

    /// Percentage of all observations
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl FrequencyEntry {
    /// Creates a new entry with formatted percentage
    pub fn new(value: FloatKey, count: u64, total: u64, precision: usize) -> Self {
        let share = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64) * 100.0
        };

        Self {
            value: value.to_string(),
            count,
            percentage: format!("{:.*}%", precision, share),
        }
    }
}

/// A respondent whose declared record count does not match the records present
#[derive(Debug, Clone, Tabled)]
pub struct MismatchEntry {
    #[tabled(rename = "Case ID")]
    pub case_id: u64,

    #[tabled(rename = "Declared")]
    pub declared: u64,

    #[tabled(rename = "Found")]
    pub actual: u64,
}

impl From<RecordCountMismatch> for MismatchEntry {
    fn from(mismatch: RecordCountMismatch) -> Self {
        Self {
            case_id: mismatch.case_id,
            declared: mismatch.declared,
            actual: mismatch.actual,
        }
    }
}

/// Formats rows as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `rows` - Rows to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_table<T: Tabled>(rows: &[T], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No data available".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
