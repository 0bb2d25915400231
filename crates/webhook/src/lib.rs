//! Webhook trigger client for the Hookline event plugin.
//!
//! Posts a JSON payload to an IFTTT-style trigger URL
//! (`<base>/trigger/<event>/with/key/<key>`), with a bounded timeout, a
//! capped redirect count, and transparent decompression of responses that
//! arrive gzip-compressed without declaring a gzip content type.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use hookline_core::{EventName, TriggerPayload};
//! use hookline_webhook::{TriggerClient, TriggerConfig};
//!
//! # async fn run() -> Result<(), hookline_webhook::DispatchError> {
//! let client = TriggerClient::new(TriggerConfig::default());
//! let payload = TriggerPayload::new(["a@b.com", "42", ""]);
//! let response = client
//!     .dispatch(&EventName::new("service_created"), "KEY123", &payload)
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::TriggerClient;
pub use config::TriggerConfig;
pub use error::DispatchError;
pub use response::TriggerResponse;
