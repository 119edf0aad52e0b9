//! # think-stats
//! Descriptive statistics for survey data.
//!
//! Tabulates observations into frequency tables to find modes, compares two
//! groups of observations by difference of means and Cohen's d, and
//! cross-checks respondent records against their detail records.

/// Frequency tables (histograms) over numeric observations.
pub mod histogram {
    pub mod errors;

    /// Wrapper allowing floating point observations to be tabulated.
    pub mod float_key;

    pub mod frequency_table;
}

/// Two-group comparisons: difference of means and standardized effect size.
pub mod comparison {
    pub mod errors;
    pub mod group_comparator;
    pub mod group_comparison;
}

/// This module contains utilities for validating respondent records against
/// the detail records that belong to them.
pub mod records {
    pub mod record_index;
    pub mod validation;
}

pub mod expectations;
pub mod prelude;
pub mod settings;
