use thiserror::Error;

/// Errors from a single webhook dispatch attempt.
///
/// HTTP status codes are deliberately not an error: a non-2xx response with
/// a body is still a dispatch result. Only transport-level failures and
/// local misconfiguration fail the call, and nothing is retried internally.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Required trigger configuration is missing or empty.
    #[error("invalid trigger configuration: {0}")]
    Configuration(String),

    /// A network, TLS, or timeout failure during the request.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body announced gzip magic bytes but failed to inflate.
    #[error("failed to decompress gzip response body: {0}")]
    Decompress(#[from] std::io::Error),
}

impl DispatchError {
    /// Returns `true` if the failure was a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_display() {
        let err = DispatchError::Configuration("no event name given".into());
        assert_eq!(
            err.to_string(),
            "invalid trigger configuration: no event name given"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn decompress_display() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt deflate stream");
        let err = DispatchError::Decompress(io);
        assert!(err.to_string().contains("corrupt deflate stream"));
    }
}
