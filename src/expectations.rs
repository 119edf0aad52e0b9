//! Checks of computed results against values known in advance.
//!
//! Used to confirm that a dataset was loaded and tabulated correctly, for example
//! that the survey contains the expected number of respondents and that the most
//! common pregnancy length is 39 weeks.

use crate::histogram::errors::FrequencyTableError;
use crate::histogram::float_key::FloatKey;
use crate::histogram::frequency_table::FrequencyTable;
use core::fmt;

/// Known results to check a tabulated dataset against.
/// Every expectation is optional; unset ones are not checked.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Expectations {
    /// Number of observations loaded, before any filtering.
    pub observation_count: Option<usize>,

    /// The most common value.
    pub mode: Option<f64>,

    /// How often the most common value occurs.
    pub top_count: Option<u64>,

    /// `(value, count)` pairs: how often specific values occur.
    /// A count of zero asserts the value is absent.
    pub value_counts: Vec<(f64, u64)>,
}

/// A single expectation that did not hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectationFailure {
    ObservationCount { expected: usize, actual: usize },
    Mode { expected: f64, actual: f64 },
    TopCount { expected: u64, actual: u64 },
    ValueCount { value: f64, expected: u64, actual: u64 },

    /// A mode expectation could not be checked because the table has no entries.
    Unavailable { expectation: &'static str, error: FrequencyTableError },
}

impl fmt::Display for ExpectationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectationFailure::ObservationCount { expected, actual } => write!(
                f,
                "Expected {} observations, found {}",
                expected, actual
            ),
            ExpectationFailure::Mode { expected, actual } => {
                write!(f, "Expected mode {}, found {}", expected, actual)
            }
            ExpectationFailure::TopCount { expected, actual } => write!(
                f,
                "Expected the most common value to occur {} times, found {}",
                expected, actual
            ),
            ExpectationFailure::ValueCount {
                value,
                expected,
                actual,
            } => write!(
                f,
                "Expected value {} to occur {} times, found {}",
                value, expected, actual
            ),
            ExpectationFailure::Unavailable { expectation, error } => {
                write!(f, "Cannot check {}: {}", expectation, error)
            }
        }
    }
}

impl Expectations {
    /// Checks every configured expectation.
    ///
    /// # Arguments
    ///
    /// * `observation_count` - Number of observations as loaded.
    /// * `table` - Frequency table built from those observations.
    ///
    /// # Returns
    ///
    /// The failed expectations, in declaration order. Empty when all hold.
    pub fn check(
        &self,
        observation_count: usize,
        table: &FrequencyTable<FloatKey>,
    ) -> Vec<ExpectationFailure> {
        let mut failures = Vec::new();

        if let Some(expected) = self.observation_count {
            if expected != observation_count {
                failures.push(ExpectationFailure::ObservationCount {
                    expected,
                    actual: observation_count,
                });
            }
        }

        if let Some(expected) = self.mode {
            match table.mode() {
                Ok(actual) if FloatKey::new(expected) == actual => {}
                Ok(actual) => failures.push(ExpectationFailure::Mode {
                    expected,
                    actual: actual.get(),
                }),
                Err(error) => failures.push(ExpectationFailure::Unavailable {
                    expectation: "mode",
                    error,
                }),
            }
        }

        if let Some(expected) = self.top_count {
            match table.top_modes(1) {
                Ok(modes) => {
                    let actual = modes.first().map(|&(_, count)| count).unwrap_or(0);
                    if actual != expected {
                        failures.push(ExpectationFailure::TopCount { expected, actual });
                    }
                }
                Err(error) => failures.push(ExpectationFailure::Unavailable {
                    expectation: "top count",
                    error,
                }),
            }
        }

        for &(value, expected) in &self.value_counts {
            let actual = table.freq(FloatKey::from(value));
            if actual != expected {
                failures.push(ExpectationFailure::ValueCount {
                    value,
                    expected,
                    actual,
                });
            }
        }

        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pregnancy_lengths() -> FrequencyTable<FloatKey> {
        [39.0, 39.0, 39.0, 39.0, 40.0]
            .into_iter()
            .map(FloatKey::new)
            .collect()
    }

    #[test]
    fn unset_expectations_always_pass() {
        let expectations = Expectations::default();
        assert!(expectations.check(0, &FrequencyTable::default()).is_empty());
    }

    #[test]
    fn matching_expectations_pass() {
        let expectations = Expectations {
            observation_count: Some(5),
            mode: Some(39.0),
            top_count: Some(4),
            value_counts: vec![(39.0, 4), (40.0, 1), (41.0, 0)],
        };

        assert!(expectations.check(5, &pregnancy_lengths()).is_empty());
    }

    #[test]
    fn reports_each_failed_expectation() {
        let expectations = Expectations {
            observation_count: Some(7643),
            mode: Some(40.0),
            top_count: Some(4693),
            value_counts: vec![(39.0, 4), (0.0, 2610)],
        };

        let failures = expectations.check(5, &pregnancy_lengths());
        assert_eq!(
            failures,
            vec![
                ExpectationFailure::ObservationCount {
                    expected: 7643,
                    actual: 5
                },
                ExpectationFailure::Mode {
                    expected: 40.0,
                    actual: 39.0
                },
                ExpectationFailure::TopCount {
                    expected: 4693,
                    actual: 4
                },
                ExpectationFailure::ValueCount {
                    value: 0.0,
                    expected: 2610,
                    actual: 0
                },
            ]
        );
    }

    #[test]
    fn empty_table_reports_unavailable() {
        let expectations = Expectations {
            observation_count: None,
            mode: Some(39.0),
            top_count: Some(1),
            value_counts: Vec::new(),
        };

        let failures = expectations.check(0, &FrequencyTable::default());
        assert_eq!(failures.len(), 2);
        assert!(failures.iter().all(|failure| matches!(
            failure,
            ExpectationFailure::Unavailable {
                error: FrequencyTableError::EmptyTable,
                ..
            }
        )));
        assert!(failures[0].to_string().contains("mode"));
    }

    #[test]
    fn value_counts_are_checked_on_empty_table() {
        let expectations = Expectations {
            value_counts: vec![(0.0, 2610), (1.0, 0)],
            ..Expectations::default()
        };

        let failures = expectations.check(0, &FrequencyTable::default());
        assert_eq!(
            failures,
            vec![ExpectationFailure::ValueCount {
                value: 0.0,
                expected: 2610,
                actual: 0
            }]
        );
        assert_eq!(
            failures[0].to_string(),
            "Expected value 0 to occur 2610 times, found 0"
        );
    }
}
