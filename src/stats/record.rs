use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::RegionId;

/// One row of the statistics payload.
///
/// Accepts the education dataset's field names (`fips`, `area_name`, `state`,
/// `bachelorsOrHigher`) as well as the generic `id`/`name`/`parent`/`value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(alias = "fips")]
    pub id: RegionId,
    #[serde(rename = "name", alias = "area_name")]
    pub display_name: String,
    #[serde(rename = "parent", alias = "state")]
    pub parent_label: String,
    #[serde(alias = "bachelorsOrHigher")]
    pub value: f64,
}

impl StatRecord {
    pub fn new(id: impl Into<RegionId>, display_name: &str, parent_label: &str, value: f64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.to_string(),
            parent_label: parent_label.to_string(),
            value,
        }
    }
}

/// Parse a JSON array of statistic records.
pub fn read_statistics_from_slice(bytes: &[u8]) -> Result<Vec<StatRecord>> {
    serde_json::from_slice(bytes)
        .context("[io::json] Statistics payload is not an array of records")
}

/// Read a JSON array of statistic records from `path`.
pub fn read_statistics_from_file(path: &Path) -> Result<Vec<StatRecord>> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open statistics file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse statistics file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_education_field_names() {
        let json = br#"[{"fips":1001,"state":"AL","area_name":"Autauga County","bachelorsOrHigher":21.9}]"#;
        let records = read_statistics_from_slice(json).unwrap();
        assert_eq!(records, vec![StatRecord::new(1001, "Autauga County", "AL", 21.9)]);
    }

    #[test]
    fn reads_generic_field_names() {
        let json = br#"[{"id":"north","name":"North","parent":"Region A","value":3}]"#;
        let records = read_statistics_from_slice(json).unwrap();
        assert_eq!(records[0].id, RegionId::from("north"));
        assert_eq!(records[0].value, 3.0);
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(read_statistics_from_slice(br#"{"fips":1}"#).is_err());
    }
}
