//! One-shot load of submission rows from the configured endpoint.
//!
//! The endpoint is expected to answer a plain `GET` with JSON in one of the
//! shapes accepted by [`common::store::records_from_payload`]. There is no
//! retry and no timeout; the caller decides what to do with a failure.

use common::error::LoadError;
use common::model::SubmissionRecord;
use common::store::records_from_payload;
use gloo_net::http::Request;
use serde_json::Value;

/// Fetches and normalizes every row served by `url`.
///
/// # Errors
/// - [`LoadError::Transport`] when the request itself fails
/// - [`LoadError::FetchFailure`] for a non-2xx status
/// - [`LoadError::Parse`] when the body is not JSON
/// - [`LoadError::EmptyPayload`] when no rows could be found
pub async fn load_from(url: &str) -> Result<Vec<SubmissionRecord>, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    LoadError::check_status(response.status())?;

    let payload = response
        .json::<Value>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    records_from_payload(&payload)
}
