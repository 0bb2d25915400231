use std::time::Duration;

/// Default trigger endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://maker.ifttt.com";

/// User-agent string sent with every trigger request.
pub const DEFAULT_USER_AGENT: &str = "Hookline IFTTT Client/1.0";

/// Configuration for the webhook trigger client.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Base URL of the trigger endpoint. Override this for testing against
    /// a mock server.
    pub base_url: String,

    /// Total request timeout.
    pub timeout: Duration,

    /// Maximum number of redirects to follow.
    pub max_redirects: usize,

    /// User-agent header value.
    pub user_agent: String,
}

impl TriggerConfig {
    /// Create a configuration with the default endpoint.
    ///
    /// Defaults: 30-second timeout, up to 2 redirects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
            max_redirects: 2,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of redirects to follow.
    #[must_use]
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set the user-agent header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self::new()
    }
}
