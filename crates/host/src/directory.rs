use async_trait::async_trait;
use dashmap::DashMap;
use hookline_core::{ClientId, ClientRecord};

use crate::error::HostError;

/// Client-record lookup provided by the host platform.
///
/// Object-safe so the plugin can hold it behind `Arc<dyn ClientDirectory>`.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Fetch the client record for the given id.
    ///
    /// Fails with [`HostError::ClientNotFound`] if the id is unknown, or
    /// [`HostError::Lookup`] if the backend itself fails; both are surfaced
    /// verbatim to the hook caller.
    async fn lookup_client(&self, id: &ClientId) -> Result<ClientRecord, HostError>;
}

/// In-memory [`ClientDirectory`] backed by a [`DashMap`].
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    records: DashMap<String, ClientRecord>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a client record.
    pub fn insert(&self, id: impl Into<ClientId>, record: ClientRecord) {
        self.records.insert(id.into().as_str().to_owned(), record);
    }
}

#[async_trait]
impl ClientDirectory for MemoryDirectory {
    async fn lookup_client(&self, id: &ClientId) -> Result<ClientRecord, HostError> {
        self.records
            .get(id.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| HostError::ClientNotFound(id.clone()))
    }
}
