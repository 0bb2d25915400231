//! Service-lifecycle hooks for the Hookline event plugin.
//!
//! Wires the host-collaborator seams (`hookline-host`) to the webhook
//! trigger client (`hookline-webhook`): when the host platform fires its
//! "service created" or "service edited" hooks, the plugin reads its
//! configuration, looks up the client record, resolves the configured
//! fields into a trigger payload, dispatches it, and records the response
//! and a timestamp for the summary view.

pub mod error;
pub mod hooks;
pub mod labels;
pub mod summary;

pub use error::PluginError;
pub use hooks::{EventPlugin, RESPONSE_KEY, Service, TIMESTAMP_KEY};
pub use labels::{FIELD_OPTIONS, label_for};
