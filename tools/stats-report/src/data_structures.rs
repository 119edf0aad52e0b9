use serde::{Deserialize, Serialize};
use think_stats::prelude::*;

/// One side of a two-group comparison
#[derive(Debug, Serialize, Deserialize)]
pub struct Group {
    /// Display name, e.g. "firsts"
    pub label: String,
    /// Observations belonging to this group, e.g. birth weight in pounds
    pub values: Vec<f64>,
}

/// The two groups to compare
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupPair {
    pub first: Group,
    pub second: Group,
}

/// Respondents and the case ids of their detail records
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSet {
    /// Respondents with their declared record counts
    pub respondents: Vec<Respondent>,
    /// Case id of every detail record, in record order
    pub record_case_ids: Vec<u64>,
}

/// Complete input document for a report
#[derive(Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// Observations to tabulate, e.g. pregnancy length in weeks
    pub observations: Vec<f64>,
    /// "Not applicable" marker removed from observations before tabulating
    #[serde(default)]
    pub sentinel: Option<f64>,
    /// Groups to compare (optional)
    #[serde(default)]
    pub groups: Option<GroupPair>,
    /// Records to cross-check (optional)
    #[serde(default)]
    pub records: Option<RecordSet>,
    /// Known results to verify
    #[serde(default)]
    pub expectations: Expectations,
}

impl Dataset {
    /// Observations with the sentinel value (if any) removed
    pub fn filtered_observations(&self) -> impl Iterator<Item = FloatKey> + '_ {
        let sentinel = self.sentinel.map(FloatKey::from);
        self.observations
            .iter()
            .map(|&value| FloatKey::from(value))
            .filter(move |&key| Some(key) != sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let dataset: Dataset = serde_json::from_str(r#"{ "observations": [39, 40] }"#).unwrap();

        assert_eq!(dataset.observations, vec![39.0, 40.0]);
        assert!(dataset.sentinel.is_none());
        assert!(dataset.groups.is_none());
        assert!(dataset.records.is_none());
        assert_eq!(dataset.expectations, Expectations::default());
    }

    #[test]
    fn sentinel_is_filtered() {
        let dataset: Dataset =
            serde_json::from_str(r#"{ "observations": [39, 99, 40, 99], "sentinel": 99 }"#)
                .unwrap();

        let values: Vec<f64> = dataset.filtered_observations().map(f64::from).collect();
        assert_eq!(values, vec![39.0, 40.0]);
    }
}
