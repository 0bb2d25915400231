use hookline_host::HostError;
use hookline_webhook::DispatchError;
use thiserror::Error;

/// Errors raised by the plugin hooks.
///
/// Every error propagates to the host's hook dispatcher; nothing is retried
/// or swallowed. Messages carry enough detail (the missing configuration
/// key or the transport error text) to diagnose without a debugger.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Required plugin configuration is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The client lookup failed or returned nothing.
    #[error("client lookup error: {0}")]
    Lookup(String),

    /// Plugin storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// The webhook dispatch failed at the transport level.
    #[error("error sending trigger request: {0}")]
    Dispatch(#[source] DispatchError),
}

impl From<HostError> for PluginError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::MissingConfig(_) => Self::Configuration(err.to_string()),
            HostError::ClientNotFound(_) | HostError::Lookup(_) => Self::Lookup(err.to_string()),
            HostError::Storage(msg) => Self::Storage(msg),
        }
    }
}

impl From<DispatchError> for PluginError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Configuration(msg) => Self::Configuration(msg),
            other => Self::Dispatch(other),
        }
    }
}
