//! Row normalization for loosely typed sheet exports.
//!
//! Spreadsheet-to-JSON bridges do not agree on header names: the same column
//! may arrive as `farmerId`, `Farmer ID` or `farmer id`. Each canonical field
//! has a fixed list of accepted spellings, probed in order.

use serde_json::{Map, Value};

use crate::model::SubmissionRecord;
use crate::photo::normalize_for_storage;

/// An untyped row as decoded from the data source.
pub type RawRecord = Map<String, Value>;

const SUBMISSION_ID: &[&str] = &["submissionId", "Submission ID", "submission id"];
const FARMER_ID: &[&str] = &["farmerId", "Farmer ID", "farmer id"];
const PRODUCT_NAME: &[&str] = &["productName", "Product Name", "product name"];
const DATE: &[&str] = &["date", "Date"];
const FPO: &[&str] = &["fpo", "FPO", "fpo name"];
const STATUS: &[&str] = &["status", "Status"];
const FARMER_NAME: &[&str] = &["farmerName", "Farmer Name", "farmer name"];
const FARMER_VILLAGE: &[&str] = &["farmerVillage", "Farmer Village", "farmer village"];
const PHOTO: &[&str] = &["photo", "Photo", "photo url"];
const VILLAGE_PHOTO: &[&str] = &["villagePhoto", "Village Photo", "village photo"];

/// Builds a [`SubmissionRecord`] from a raw row. Never fails: missing fields
/// become empty strings and unknown keys are dropped.
pub fn normalize(raw: &RawRecord) -> SubmissionRecord {
    SubmissionRecord {
        submission_id: field(raw, SUBMISSION_ID),
        farmer_id: field(raw, FARMER_ID),
        product_name: field(raw, PRODUCT_NAME),
        date: field(raw, DATE),
        fpo: field(raw, FPO),
        status: field(raw, STATUS),
        farmer_name: field(raw, FARMER_NAME),
        farmer_village: field(raw, FARMER_VILLAGE),
        photo: normalize_for_storage(&field(raw, PHOTO)),
        village_photo: normalize_for_storage(&field(raw, VILLAGE_PHOTO)),
    }
}

/// Normalizes any JSON value. Non-object elements give an all-empty record.
pub fn normalize_value(value: &Value) -> SubmissionRecord {
    match value.as_object() {
        Some(raw) => normalize(raw),
        None => SubmissionRecord::default(),
    }
}

/// Returns the first non-null value found under `keys`, trying each key as
/// written and then lower-cased.
///
/// The first non-null hit wins even when it is an empty string, so a blank
/// `submissionId` column shadows a populated `Submission ID` one.
fn lookup<'a>(raw: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        raw.get(*key)
            .filter(|v| !v.is_null())
            .or_else(|| raw.get(&key.to_lowercase()).filter(|v| !v.is_null()))
    })
}

fn field(raw: &RawRecord, keys: &[&str]) -> String {
    lookup(raw, keys).map(as_text).unwrap_or_default()
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}
