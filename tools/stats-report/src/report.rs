//! Report generation
//!
//! Runs every analysis over a [`Dataset`] and renders the results as text:
//! - Frequency analysis (mode and most common values)
//! - Value counts ordered by value (optional)
//! - Group comparison (difference of means, Cohen's d)
//! - Record count validation
//! - Expectation checks

use crate::data_structures::{Dataset, GroupPair, RecordSet};
use crate::tables::{format_table, FrequencyEntry, MismatchEntry};
use log::{debug, info};
use think_stats::prelude::*;
use thiserror::Error;

/// Errors that can occur while analysing a dataset
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Frequency analysis error: {0}")]
    Frequency(#[from] FrequencyTableError),

    #[error("Group comparison error: {0}")]
    Comparison(#[from] ComparisonError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

/// Rendered report and the number of checks that failed
#[derive(Debug)]
pub struct Report {
    pub text: String,
    pub failed_checks: usize,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failed_checks == 0
    }
}

/// Generate the complete report for a dataset
///
/// # Arguments
/// * `dataset` - The parsed input document
/// * `settings` - Presentation settings (already sanitized)
///
/// # Returns
/// * `Ok(Report)` - The report text and failed check count
/// * `Err(AnalysisError)` - If a group comparison is impossible
pub fn generate_report(dataset: &Dataset, settings: &ReportSettings) -> Result<Report> {
    let table: FrequencyTable<FloatKey> = dataset.filtered_observations().collect();
    info!(
        "Tabulated {} of {} observations",
        table.total(),
        dataset.observations.len()
    );

    // Records and expectations are still checked when nothing was tabulated.
    let mut sections = Vec::new();
    if table.is_empty() {
        sections.push(empty_frequency_section(dataset.observations.len()));
    } else {
        sections.push(frequency_section(&table, settings)?);
        if settings.value_counts {
            sections.push(value_counts_section(&table, settings));
        }
    }

    if let Some(groups) = &dataset.groups {
        sections.push(comparison_section(groups)?);
    }

    let mut failed_checks = 0;
    if let Some(records) = &dataset.records {
        let (section, mismatches) = records_section(records);
        failed_checks += mismatches;
        sections.push(section);
    }

    let failures = dataset
        .expectations
        .check(dataset.observations.len(), &table);
    failed_checks += failures.len();
    sections.push(expectations_section(&failures));

    debug!("Report complete with {} failed check(s)", failed_checks);
    Ok(Report {
        text: sections.join("\n\n"),
        failed_checks,
    })
}

fn frequency_section(table: &FrequencyTable<FloatKey>, settings: &ReportSettings) -> Result<String> {
    let mode = table.mode()?;
    let rows: Vec<FrequencyEntry> = table
        .top_modes(settings.top_modes)?
        .into_iter()
        .map(|(value, count)| {
            FrequencyEntry::new(value, count, table.total(), settings.percentage_precision)
        })
        .collect();

    let title = format!("Most Common Values (top {})", settings.top_modes);
    Ok(format!(
        "Frequency Analysis\n{}\nObservations: {}\nDistinct values: {}\nMode: {} ({} occurrences)\n\n{}",
        "=".repeat(18),
        table.total(),
        table.len(),
        mode,
        table.freq(mode),
        format_table(&rows, Some(title.as_str()))
    ))
}

fn empty_frequency_section(loaded: usize) -> String {
    format!(
        "Frequency Analysis\n{}\nNo observations to tabulate ({} loaded, all filtered out).",
        "=".repeat(18),
        loaded
    )
}

fn value_counts_section(table: &FrequencyTable<FloatKey>, settings: &ReportSettings) -> String {
    let rows: Vec<FrequencyEntry> = table
        .sorted_by_value()
        .into_iter()
        .map(|(value, count)| {
            FrequencyEntry::new(value, count, table.total(), settings.percentage_precision)
        })
        .collect();

    format_table(&rows, Some("Value Counts"))
}

fn comparison_section(groups: &GroupPair) -> Result<String> {
    let first = &groups.first;
    let second = &groups.second;
    let comparison = compare(&first.values, &second.values)?;

    let title = format!("Group Comparison ({} vs {})", first.label, second.label);
    Ok(format!(
        "{}\n{}\n\
         Mean of {}: {:.6} ({} observations)\n\
         Mean of {}: {:.6} ({} observations)\n\
         Difference of means: {:.6}\n\
         Cohen's d: {:.6}",
        title,
        "=".repeat(title.len()),
        first.label,
        mean(&first.values)?,
        first.values.len(),
        second.label,
        mean(&second.values)?,
        second.values.len(),
        comparison.mean_difference,
        comparison.effect_size
    ))
}

fn records_section(records: &RecordSet) -> (String, usize) {
    let index = RecordIndex::from_case_ids(records.record_case_ids.iter().copied());
    let mismatches = validate_record_counts(&records.respondents, &index);
    let heading = format!("Record Validation\n{}", "=".repeat(17));

    if mismatches.is_empty() {
        let text = format!(
            "{}\nAll {} respondents match their {} records.",
            heading,
            records.respondents.len(),
            index.record_count()
        );
        return (text, 0);
    }

    let count = mismatches.len();
    let rows: Vec<MismatchEntry> = mismatches.into_iter().map(MismatchEntry::from).collect();
    let text = format!(
        "{}\n{}",
        heading,
        format_table(&rows, Some("Inconsistent Respondents"))
    );
    (text, count)
}

fn expectations_section(failures: &[ExpectationFailure]) -> String {
    let heading = format!("Expectations\n{}", "=".repeat(12));
    if failures.is_empty() {
        return format!("{}\nAll expectations met.", heading);
    }

    let lines: Vec<String> = failures
        .iter()
        .map(|failure| format!("FAILED: {}", failure))
        .collect();
    format!("{}\n{}", heading, lines.join("\n"))
}
