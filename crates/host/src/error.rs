use hookline_core::ClientId;
use thiserror::Error;

/// Errors surfaced by the host-platform collaborators.
#[derive(Debug, Error)]
pub enum HostError {
    /// The client directory has no record for the given id.
    #[error("no client found for id {0}")]
    ClientNotFound(ClientId),

    /// The client directory backend failed.
    #[error("client lookup failed: {0}")]
    Lookup(String),

    /// A required configuration value is missing or empty.
    #[error("missing required configuration value '{0}'")]
    MissingConfig(String),

    /// The plugin storage backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HostError::ClientNotFound(ClientId::new("42"));
        assert_eq!(err.to_string(), "no client found for id 42");

        let err = HostError::MissingConfig("maker_key".into());
        assert_eq!(
            err.to_string(),
            "missing required configuration value 'maker_key'"
        );
    }
}
