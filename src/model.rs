// src/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One state's population row as returned by the DataUSA API.
///
/// Field names on the wire (JSON keys and CSV headers) are the API's own,
/// e.g. `"ID State"`. `abbreviation` never comes from the API; it is filled
/// in by [`crate::normalize`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct StateRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "ID State")]
    pub state_id: String,
    #[serde(rename = "ID Year")]
    pub year_id: i32,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "Slug State")]
    pub state_slug: String,
    #[serde(rename = "Abbreviation", default)]
    pub abbreviation: Option<String>,
}

/// Top-level API payload. The API also sends a `source` block; it is not
/// part of what we keep, so serde drops it.
///
/// Rows stay as raw JSON here so one bad row can be dropped on its own.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}

/// The fetched, normalized records plus when they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<StateRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(records: Vec<StateRecord>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(state: &str, population: u64) -> StateRecord {
    StateRecord {
        state: state.to_string(),
        state_id: "04000US00".to_string(),
        year_id: 2021,
        year: "2021".to_string(),
        population,
        state_slug: state.to_lowercase().replace(' ', "-"),
        abbreviation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_row() {
        let json = r#"{"State":"California","ID State":"04000US06","ID Year":2021,"Year":"2021","Population":39237836,"Slug State":"california"}"#;
        let rec: StateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.state, "California");
        assert_eq!(rec.state_id, "04000US06");
        assert_eq!(rec.year_id, 2021);
        assert_eq!(rec.year, "2021");
        assert_eq!(rec.population, 39_237_836);
        assert_eq!(rec.state_slug, "california");
        assert_eq!(rec.abbreviation, None);
    }

    #[test]
    fn test_response_ignores_source() {
        let json = r#"{"data":[],"source":[{"name":"acs_yg_total_population_1"}]}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, Some(vec![]));
    }

    #[test]
    fn test_response_without_data() {
        let resp: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_none());
    }
}
