// src/select.rs

use crate::model::StateRecord;

/// A dropdown entry: the record it came from plus its label and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub record: StateRecord,
    /// `"{state} - {abbreviation}"`
    pub label: String,
    /// The state name.
    pub value: String,
}

impl SelectOption {
    fn from_record(rec: &StateRecord) -> Self {
        let abbr = rec.abbreviation.as_deref().unwrap_or_default();
        Self {
            label: format!("{} - {}", rec.state, abbr),
            value: rec.state.clone(),
            record: rec.clone(),
        }
    }
}

/// One option per record, in input order. Duplicates are kept.
pub fn project(records: &[StateRecord]) -> Vec<SelectOption> {
    records.iter().map(SelectOption::from_record).collect()
}

/// Case-insensitive substring match on the label. A blank query matches all.
pub fn search<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
        .collect()
}

/// First option whose value equals `value`.
pub fn find_by_value<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|o| o.value == value)
}
