use hashbrown::HashMap;
use log::debug;

/// Maps a case id to the positions of the detail records belonging to that case.
///
/// Survey data is commonly split into one file of respondents and another of
/// detail records (e.g. one record per pregnancy), joined by a shared case id.
/// This index answers "which detail records belong to this respondent" without
/// rescanning the detail records.
///
/// # Remarks
///
/// Positions are stored in the order the records were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIndex {
    positions: HashMap<u64, Vec<usize>>,
    record_count: usize,
}

impl RecordIndex {
    /// Builds the index from the case id of every detail record, in record order.
    ///
    /// # Arguments
    ///
    /// * `case_ids` - The case id of each detail record. The n-th item is the
    ///   record at position n.
    pub fn from_case_ids<I>(case_ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut positions: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut record_count = 0;

        for (position, case_id) in case_ids.into_iter().enumerate() {
            positions.entry(case_id).or_default().push(position);
            record_count += 1;
        }

        debug!(
            "Indexed {} records across {} cases",
            record_count,
            positions.len()
        );

        Self {
            positions,
            record_count,
        }
    }

    /// Positions of the records for `case_id`. Empty if the case has no records.
    pub fn records_for(&self, case_id: u64) -> &[usize] {
        self.positions
            .get(&case_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of records for `case_id`.
    pub fn count_for(&self, case_id: u64) -> usize {
        self.records_for(case_id).len()
    }

    /// Number of distinct case ids with at least one record.
    pub fn case_count(&self) -> usize {
        self.positions.len()
    }

    /// Total number of records indexed.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

impl FromIterator<u64> for RecordIndex {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self::from_case_ids(iter)
    }
}
