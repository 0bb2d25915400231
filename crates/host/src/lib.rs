//! Host-platform collaborator seams for the Hookline event plugin.
//!
//! The billing platform owns hook registration, configuration persistence,
//! client records, and plugin storage. This crate models those collaborators
//! as traits the plugin calls into, plus in-memory implementations for tests
//! and local development. Nothing here talks to a real platform.

pub mod config;
pub mod directory;
pub mod error;
pub mod storage;

pub use config::{ACCESS_KEY, EVENT_KEY, MemoryConfig, PluginConfig, TriggerSettings};
pub use directory::{ClientDirectory, MemoryDirectory};
pub use error::HostError;
pub use storage::{MemoryStorage, PluginStorage};
