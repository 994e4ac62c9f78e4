//! Failure modes of the one-shot remote load.
//!
//! None of these are fatal: the page keeps the seed record and shows the
//! error text in place of the lookup message.

use thiserror::Error;

/// Why loading submissions from the data source did not replace the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The transport answered with a non-success status code.
    #[error("Fetch failed with status {0}")]
    FetchFailure(u16),

    /// The payload resolved to an empty array, or to none of the accepted shapes.
    #[error("No rows returned from the data source.")]
    EmptyPayload,

    /// The request never produced a response.
    #[error("Could not load data: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Could not load data: {0}")]
    Parse(String),
}

impl LoadError {
    /// Maps an HTTP status code to `Ok` for 2xx and [`LoadError::FetchFailure`] otherwise.
    pub fn check_status(status: u16) -> Result<(), LoadError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(LoadError::FetchFailure(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        assert_eq!(LoadError::check_status(200), Ok(()));
        assert_eq!(LoadError::check_status(204), Ok(()));
    }

    #[test]
    fn other_statuses_are_fetch_failures() {
        assert_eq!(LoadError::check_status(404), Err(LoadError::FetchFailure(404)));
        assert_eq!(LoadError::check_status(302), Err(LoadError::FetchFailure(302)));
        assert_eq!(
            LoadError::FetchFailure(500).to_string(),
            "Fetch failed with status 500"
        );
    }

    #[test]
    fn empty_payload_message_is_user_facing() {
        assert_eq!(
            LoadError::EmptyPayload.to_string(),
            "No rows returned from the data source."
        );
    }
}
