//! In-memory submission collection.
//!
//! The store starts with the seed record and may be replaced once by the
//! startup load. Lookups are a linear scan; the collection is small and
//! never indexed.

use serde_json::Value;

use crate::error::LoadError;
use crate::model::SubmissionRecord;
use crate::normalize::normalize_value;

/// Ordered collection of normalized submissions.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionStore {
    records: Vec<SubmissionRecord>,
}

impl SubmissionStore {
    /// A store holding only the seed record.
    pub fn initialize() -> Self {
        Self {
            records: vec![SubmissionRecord::seed()],
        }
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Submission ids in collection order, for the quick-fill chips.
    pub fn ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.submission_id.as_str())
            .collect()
    }

    /// Swaps the whole collection.
    pub fn replace(&mut self, records: Vec<SubmissionRecord>) {
        self.records = records;
    }

    /// Normalizes `payload` and replaces the collection with the result.
    ///
    /// On error the current collection is left untouched. Returns the number
    /// of records loaded.
    pub fn load_payload(&mut self, payload: &Value) -> Result<usize, LoadError> {
        let records = records_from_payload(payload)?;
        let count = records.len();
        self.replace(records);
        Ok(count)
    }

    /// First record whose id equals `id`, ignoring case.
    pub fn find_by_id(&self, id: &str) -> Option<&SubmissionRecord> {
        let wanted = id.to_lowercase();
        self.records
            .iter()
            .find(|r| r.submission_id.to_lowercase() == wanted)
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::initialize()
    }
}

/// Finds the row array inside a payload: a bare array, `{"data": [...]}` or
/// `{"rows": [...]}`. Anything else counts as no rows.
pub fn payload_rows(payload: &Value) -> &[Value] {
    if let Some(rows) = payload.as_array() {
        return rows;
    }
    ["data", "rows"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Normalizes every row of `payload`. Fails with [`LoadError::EmptyPayload`]
/// when there are no rows.
pub fn records_from_payload(payload: &Value) -> Result<Vec<SubmissionRecord>, LoadError> {
    let rows = payload_rows(payload);
    if rows.is_empty() {
        return Err(LoadError::EmptyPayload);
    }
    Ok(rows.iter().map(normalize_value).collect())
}
