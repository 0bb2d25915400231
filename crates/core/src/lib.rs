//! Core domain types for the Hookline event plugin.
//!
//! This crate is deliberately free of I/O: it defines the client record and
//! payload types shared by the host-collaborator seams
//! (`hookline-host`), the webhook trigger client (`hookline-webhook`), and
//! the plugin facade (`hookline-plugin`).

pub mod outcome;
pub mod payload;
pub mod record;
pub mod types;

pub use outcome::DispatchRecord;
pub use payload::{FieldSelectors, MAX_PAYLOAD_FIELDS, TriggerPayload, resolve};
pub use record::ClientRecord;
pub use types::{ClientId, EventName, ServiceId};
