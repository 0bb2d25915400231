use serde::{Deserialize, Serialize};

/// Last known outcome of a webhook dispatch, as persisted in host storage.
///
/// Written in full after every completed dispatch attempt; a failed attempt
/// leaves the previously stored record untouched. Display-only: the
/// response body is stored as text and never re-parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Raw response text returned by the trigger endpoint.
    pub response: String,

    /// Human-readable timestamp of the dispatch.
    pub timestamp: String,
}

impl DispatchRecord {
    /// Create a record from a response body and timestamp.
    #[must_use]
    pub fn new(response: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            timestamp: timestamp.into(),
        }
    }
}
