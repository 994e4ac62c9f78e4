//! Component state for the submission lookup page.

use common::lookup::LookupState;
use common::store::SubmissionStore;

/// Runtime state of the `LookupComponent`.
///
/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct LookupComponent {
    /// Records searched by the form. Seeded, then replaced by the remote load.
    pub store: SubmissionStore,

    /// Current content of the search input.
    pub query: String,

    /// Result of the last submitted search.
    pub lookup: LookupState,

    /// True while the remote load is in flight.
    pub loading: bool,

    /// User-facing text of the last load failure.
    pub fetch_error: Option<String>,

    /// Guard so the remote load only starts once.
    pub loaded: bool,
}

impl LookupComponent {
    /// Seed-only state. `loading` starts true when a remote source is configured.
    pub fn new(has_remote_source: bool) -> Self {
        Self {
            store: SubmissionStore::initialize(),
            query: String::new(),
            lookup: LookupState::default(),
            loading: has_remote_source,
            fetch_error: None,
            loaded: false,
        }
    }

    /// Text for the empty state: the load error wins over the lookup message.
    pub fn empty_state_message(&self) -> String {
        self.fetch_error
            .clone()
            .or_else(|| self.lookup.message())
            .unwrap_or_default()
    }
}
