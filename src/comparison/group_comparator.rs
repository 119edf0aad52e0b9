//! Difference of means and standardized effect size between two groups.
//!
//! Groups are plain slices of observations; they are only ever read.
//! All functions follow standard IEEE-754 semantics, so NaN or infinite inputs
//! propagate to the result instead of raising an error.

use crate::comparison::errors::{ComparisonError, GroupSide};
use crate::comparison::group_comparison::GroupComparison;
use log::{debug, trace};

/// Arithmetic mean of `group`.
///
/// # Errors
///
/// [`ComparisonError::EmptyGroup`] if `group` is empty. The error names the
/// [`GroupSide::First`] side; the two-group functions below report the side
/// that was actually empty.
pub fn mean(group: &[f64]) -> Result<f64, ComparisonError> {
    side_mean(group, GroupSide::First)
}

/// Sample variance of `group` (denominator `n - 1`).
///
/// # Errors
///
/// [`ComparisonError::InsufficientData`] if `group` holds fewer than two observations.
pub fn sample_variance(group: &[f64]) -> Result<f64, ComparisonError> {
    if group.len() < 2 {
        return Err(ComparisonError::InsufficientData {
            combined: group.len(),
        });
    }

    let mean = side_mean(group, GroupSide::First)?;
    Ok(sum_of_squares(group, mean) / (group.len() - 1) as f64)
}

/// Variance estimate shared by both groups, weighting each group's sample
/// variance by its degrees of freedom.
///
/// `((n_a - 1) * var_a + (n_b - 1) * var_b) / (n_a + n_b - 2)`
///
/// A group holding a single observation contributes no degrees of freedom.
///
/// # Errors
///
/// - [`ComparisonError::EmptyGroup`] if either group is empty.
/// - [`ComparisonError::InsufficientData`] if `n_a + n_b <= 2`.
pub fn pooled_variance(first: &[f64], second: &[f64]) -> Result<f64, ComparisonError> {
    let mean_first = side_mean(first, GroupSide::First)?;
    let mean_second = side_mean(second, GroupSide::Second)?;
    pooled_variance_around(first, mean_first, second, mean_second)
}

/// Returns `mean(first) - mean(second)`.
///
/// # Errors
///
/// [`ComparisonError::EmptyGroup`] if either group is empty.
pub fn difference_of_means(first: &[f64], second: &[f64]) -> Result<f64, ComparisonError> {
    let mean_first = side_mean(first, GroupSide::First)?;
    let mean_second = side_mean(second, GroupSide::Second)?;
    Ok(mean_first - mean_second)
}

/// Computes Cohen's d: the difference of means in units of pooled standard deviation.
///
/// # Remarks
///
/// The result is antisymmetric, swapping the groups negates it. When the pooled
/// variance is zero the division follows IEEE rules and yields an infinity or NaN.
///
/// # Errors
///
/// - [`ComparisonError::EmptyGroup`] if either group is empty.
/// - [`ComparisonError::InsufficientData`] if `first.len() + second.len() <= 2`.
pub fn cohen_effect_size(first: &[f64], second: &[f64]) -> Result<f64, ComparisonError> {
    compare(first, second).map(|comparison| comparison.effect_size)
}

/// Computes both the difference of means and Cohen's d in a single pass over the means.
///
/// # Errors
///
/// Same as [`cohen_effect_size`].
pub fn compare(first: &[f64], second: &[f64]) -> Result<GroupComparison, ComparisonError> {
    debug!(
        "Comparing groups of {} and {} observations",
        first.len(),
        second.len()
    );

    let mean_first = side_mean(first, GroupSide::First)?;
    let mean_second = side_mean(second, GroupSide::Second)?;
    let pooled = pooled_variance_around(first, mean_first, second, mean_second)?;

    let mean_difference = mean_first - mean_second;
    let effect_size = mean_difference / pooled.sqrt();
    trace!(
        "mean_first={mean_first}, mean_second={mean_second}, pooled_variance={pooled}, d={effect_size}"
    );

    Ok(GroupComparison::new(mean_difference, effect_size))
}

fn side_mean(group: &[f64], side: GroupSide) -> Result<f64, ComparisonError> {
    if group.is_empty() {
        return Err(ComparisonError::EmptyGroup { group: side });
    }

    Ok(group.iter().sum::<f64>() / group.len() as f64)
}

fn sum_of_squares(group: &[f64], mean: f64) -> f64 {
    group.iter().map(|value| (value - mean).powi(2)).sum()
}

fn pooled_variance_around(
    first: &[f64],
    mean_first: f64,
    second: &[f64],
    mean_second: f64,
) -> Result<f64, ComparisonError> {
    let combined = first.len() + second.len();
    if combined <= 2 {
        return Err(ComparisonError::InsufficientData { combined });
    }

    // (n - 1) * sample variance is the sum of squared deviations.
    let squares = sum_of_squares(first, mean_first) + sum_of_squares(second, mean_second);
    Ok(squares / (combined - 2) as f64)
}
