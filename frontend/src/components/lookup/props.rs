//! Properties for the `LookupComponent`.

use yew::prelude::*;

/// Properties for the `LookupComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct LookupProps {
    /// Endpoint serving the submission rows.
    ///
    /// - `Some(url)`: the component shows a loading panel and fetches the rows
    ///   once, on first render. A successful load replaces the seed record; a
    ///   failed one keeps it and shows the error.
    /// - `None` (the default): the page works on the seed record only.
    #[prop_or_default]
    pub data_url: Option<String>,
}
