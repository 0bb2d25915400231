use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::HostError;

/// Key/value storage scoped to this plugin by the host platform.
///
/// Plain overwrite semantics: no versioning, no read-modify-write. If the
/// host allows concurrent hook invocations, last write wins.
#[async_trait]
pub trait PluginStorage: Send + Sync {
    /// Get the stored value for a key. Returns `None` if never written.
    async fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Store a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// In-memory [`PluginStorage`] backed by a [`DashMap`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: DashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PluginStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
