use thiserror::Error;

/// Errors raised when querying a [`FrequencyTable`].
///
/// [`FrequencyTable`]: crate::histogram::frequency_table::FrequencyTable
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FrequencyTableError {
    /// The table was built from zero observations.
    #[error("The frequency table contains no observations.")]
    EmptyTable,
}
