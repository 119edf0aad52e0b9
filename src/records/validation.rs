use crate::records::record_index::RecordIndex;
use derive_new::new;
use log::warn;

/// A respondent and the number of detail records they reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Respondent {
    /// Identifier shared with the respondent's detail records.
    pub case_id: u64,

    /// How many detail records the respondent declared (e.g. number of pregnancies).
    pub declared: u64,
}

/// A respondent whose declared record count disagrees with the records present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RecordCountMismatch {
    pub case_id: u64,

    /// Count the respondent declared.
    pub declared: u64,

    /// Count found in the [`RecordIndex`].
    pub actual: u64,
}

/// Cross-checks every respondent's declared record count against the index.
///
/// # Arguments
///
/// * `respondents` - Respondents to check, in the order mismatches should be reported.
/// * `index` - Index of the detail records.
///
/// # Returns
///
/// The respondents whose declared count differs from the indexed count.
/// An empty list means both sources agree.
pub fn validate_record_counts(
    respondents: &[Respondent],
    index: &RecordIndex,
) -> Vec<RecordCountMismatch> {
    let mismatches: Vec<RecordCountMismatch> = respondents
        .iter()
        .filter_map(|respondent| {
            let actual = index.count_for(respondent.case_id) as u64;
            (actual != respondent.declared).then(|| {
                RecordCountMismatch::new(respondent.case_id, respondent.declared, actual)
            })
        })
        .collect();

    if !mismatches.is_empty() {
        warn!(
            "{} of {} respondents declare a record count that does not match the records present",
            mismatches.len(),
            respondents.len()
        );
    }

    mismatches
}
