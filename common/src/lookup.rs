use crate::model::SubmissionRecord;
use crate::store::SubmissionStore;

/// Outcome of the last lookup, driving the result area of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupState {
    /// Nothing searched yet.
    Idle,
    /// The query was empty after trimming.
    PromptForInput,
    /// No record matched the (trimmed) query.
    NotFound(String),
    /// A record matched.
    ShowingDetail(SubmissionRecord),
}

impl LookupState {
    /// Status text for the empty state. `None` while showing a record.
    pub fn message(&self) -> Option<String> {
        match self {
            LookupState::Idle => Some("Enter a submission ID to see its details.".to_string()),
            LookupState::PromptForInput => Some("Enter a submission ID to search.".to_string()),
            LookupState::NotFound(query) => Some(format!("No submission found for \"{query}\".")),
            LookupState::ShowingDetail(_) => None,
        }
    }

    pub fn selected(&self) -> Option<&SubmissionRecord> {
        match self {
            LookupState::ShowingDetail(record) => Some(record),
            _ => None,
        }
    }
}

impl Default for LookupState {
    fn default() -> Self {
        LookupState::Idle
    }
}

/// Resolves a user query against the store.
pub fn lookup(store: &SubmissionStore, query: &str) -> LookupState {
    let cleaned = query.trim();
    if cleaned.is_empty() {
        return LookupState::PromptForInput;
    }

    match store.find_by_id(cleaned) {
        Some(record) => LookupState::ShowingDetail(record.clone()),
        None => LookupState::NotFound(cleaned.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_query_prompts_for_input() {
        let store = SubmissionStore::initialize();
        assert_eq!(lookup(&store, ""), LookupState::PromptForInput);
        assert_eq!(lookup(&store, "   "), LookupState::PromptForInput);
        assert_eq!(
            LookupState::PromptForInput.message().as_deref(),
            Some("Enter a submission ID to search.")
        );
    }

    #[test]
    fn seed_record_is_found() {
        let store = SubmissionStore::initialize();
        let state = lookup(&store, "bfcd74b0");
        assert_eq!(state.selected().unwrap().farmer_village, "Hshs");
        assert_eq!(state.message(), None);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let store = SubmissionStore::initialize();
        assert!(lookup(&store, "  BFCD74B0 ").selected().is_some());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = SubmissionStore::initialize();
        let state = lookup(&store, "zzz");
        assert_eq!(state, LookupState::NotFound("zzz".to_string()));
        assert_eq!(
            state.message().as_deref(),
            Some("No submission found for \"zzz\".")
        );
    }

    #[test]
    fn lookup_sees_replaced_collection() {
        let mut store = SubmissionStore::initialize();
        store
            .load_payload(&json!({ "data": [{ "Submission ID": "n9", "Farmer Village": "Tal" }] }))
            .unwrap();

        assert_eq!(
            lookup(&store, "bfcd74b0"),
            LookupState::NotFound("bfcd74b0".to_string())
        );
        assert_eq!(lookup(&store, "N9").selected().unwrap().farmer_village, "Tal");
    }

    #[test]
    fn starts_idle() {
        assert_eq!(LookupState::default(), LookupState::Idle);
        assert!(LookupState::Idle.selected().is_none());
    }
}
