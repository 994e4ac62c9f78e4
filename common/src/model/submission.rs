use serde::{Deserialize, Serialize};

/// Placeholder shown in the detail grid for empty values.
pub const EMPTY_VALUE: &str = "—";

/// A single submission row as displayed by the lookup page.
///
/// Every field is always present. Values missing from the data source are
/// stored as empty strings, never as `None`. The two photo fields hold URLs
/// already passed through [`crate::photo::normalize_for_storage`].
///
/// Records are built once per load cycle and never mutated afterwards; the
/// store swaps the whole collection instead.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    /// Lookup key. Compared case-insensitively.
    pub submission_id: String,
    pub farmer_id: String,
    pub product_name: String,
    /// Free text as entered in the sheet, no date parsing.
    pub date: String,
    pub fpo: String,
    pub status: String,
    pub farmer_name: String,
    pub farmer_village: String,
    pub photo: String,
    pub village_photo: String,
}

impl SubmissionRecord {
    /// The built-in example record, used until (or instead of) a remote load.
    pub fn seed() -> Self {
        Self {
            submission_id: "bfcd74b0".to_string(),
            farmer_id: "89".to_string(),
            product_name: "rajma".to_string(),
            date: "03/12/2025".to_string(),
            fpo: "Jammu".to_string(),
            status: "Gsh".to_string(),
            farmer_name: "Gshs".to_string(),
            farmer_village: "Hshs".to_string(),
            photo: "/Untitled spreadsheet_Images/bfcd74b0.photo.154320.jpg".to_string(),
            village_photo: "/Untitled spreadsheet_Images/bfcd74b0.village.154320.jpg"
                .to_string(),
        }
    }

    /// Text for the status pill. An empty status reads as "Pending".
    pub fn status_label(&self) -> &str {
        if self.status.is_empty() {
            "Pending"
        } else {
            &self.status
        }
    }

    /// Labelled rows for the detail grid, in display order.
    ///
    /// The submission id is shown verbatim; every other empty value is
    /// replaced by [`EMPTY_VALUE`].
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let or_dash = |value: &str| {
            if value.is_empty() {
                EMPTY_VALUE.to_string()
            } else {
                value.to_string()
            }
        };

        vec![
            ("Submission ID", self.submission_id.clone()),
            ("Farmer ID", or_dash(&self.farmer_id)),
            ("Product Name", or_dash(&self.product_name)),
            ("Date", or_dash(&self.date)),
            ("FPO", or_dash(&self.fpo)),
            ("Status", or_dash(&self.status)),
            ("Farmer Name", or_dash(&self.farmer_name)),
            ("Farmer Village", or_dash(&self.farmer_village)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_reads_as_pending() {
        let record = SubmissionRecord::default();
        assert_eq!(record.status_label(), "Pending");
        assert_eq!(SubmissionRecord::seed().status_label(), "Gsh");
    }

    #[test]
    fn detail_rows_dash_empty_values_but_not_the_id() {
        let record = SubmissionRecord {
            farmer_name: "Asha".to_string(),
            ..Default::default()
        };
        let rows = record.detail_rows();

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], ("Submission ID", String::new()));
        assert_eq!(rows[1], ("Farmer ID", EMPTY_VALUE.to_string()));
        assert_eq!(rows[6], ("Farmer Name", "Asha".to_string()));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SubmissionRecord::seed()).unwrap();
        assert_eq!(json["submissionId"], "bfcd74b0");
        assert_eq!(json["farmerVillage"], "Hshs");
        assert!(json.get("village_photo").is_none());
    }
}
