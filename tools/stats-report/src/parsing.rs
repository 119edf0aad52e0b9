//! File parsing functionality for report datasets
//!
//! This module handles loading a dataset from a JSON file, which may be
//! ZStandard compressed (`.zst` extension).

use crate::data_structures::Dataset;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use zstd::Decoder;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to decompress zstd file: {0}")]
    Decompression(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse a dataset file
///
/// Files ending in `.zst` are decompressed with ZStandard while being read;
/// anything else is read as plain JSON.
///
/// # Arguments
/// * `file_path` - Path to the `.json` or `.json.zst` file
///
/// # Returns
/// * `Ok(Dataset)` - Successfully parsed dataset
/// * `Err(ParsingError)` - If file reading, decompression, or JSON parsing failed
pub fn parse_dataset(file_path: &Path) -> Result<Dataset> {
    let file = File::open(file_path)?;
    let is_compressed = file_path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("zst"));

    let dataset: Dataset = if is_compressed {
        let mut decoder = Decoder::new(file)
            .map_err(|e| ParsingError::Decompression(format!("Failed to create decoder: {}", e)))?;
        serde_json::from_reader(&mut decoder)?
    } else {
        serde_json::from_reader(BufReader::new(file))?
    };

    debug!(
        "Loaded {} observations from {}",
        dataset.observations.len(),
        file_path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DOCUMENT: &str = r#"{
        "observations": [39, 39, 39, 39, 40],
        "groups": {
            "first": { "label": "firsts", "values": [7.0, 7.5, 8.0] },
            "second": { "label": "others", "values": [6.0, 6.5, 7.0] }
        },
        "records": {
            "respondents": [{ "case_id": 1, "declared": 2 }],
            "record_case_ids": [1, 1]
        },
        "expectations": { "mode": 39, "top_count": 4 }
    }"#;

    #[test]
    fn parses_plain_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, DOCUMENT).unwrap();

        let dataset = parse_dataset(&path).unwrap();
        assert_eq!(dataset.observations.len(), 5);
        assert_eq!(dataset.groups.unwrap().second.label, "others");
        assert_eq!(dataset.records.unwrap().record_case_ids, vec![1, 1]);
        assert_eq!(dataset.expectations.mode, Some(39.0));
    }

    #[test]
    fn parses_zstd_compressed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json.zst");
        let compressed = zstd::encode_all(DOCUMENT.as_bytes(), 3).unwrap();
        fs::write(&path, compressed).unwrap();

        let dataset = parse_dataset(&path).unwrap();
        assert_eq!(dataset.observations.len(), 5);
        assert_eq!(dataset.expectations.top_count, Some(4));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let result = parse_dataset(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"observations\": [1, 2").unwrap();

        let result = parse_dataset(&path);
        assert!(matches!(result, Err(ParsingError::JsonParse(_))));
    }
}
