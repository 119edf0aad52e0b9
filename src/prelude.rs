// Histograms
pub use crate::histogram::errors::FrequencyTableError;
pub use crate::histogram::float_key::FloatKey;
pub use crate::histogram::frequency_table::FrequencyTable;

// Group comparison
pub use crate::comparison::errors::{ComparisonError, GroupSide};
pub use crate::comparison::group_comparator::{
    cohen_effect_size, compare, difference_of_means, mean, pooled_variance, sample_variance,
};
pub use crate::comparison::group_comparison::GroupComparison;

// Records
pub use crate::records::record_index::RecordIndex;
pub use crate::records::validation::{validate_record_counts, RecordCountMismatch, Respondent};

// Reporting
pub use crate::expectations::{ExpectationFailure, Expectations};
pub use crate::settings::ReportSettings;
