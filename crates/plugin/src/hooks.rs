use std::sync::Arc;

use chrono::Utc;
use hookline_core::{ClientId, DispatchRecord, ServiceId, resolve};
use hookline_host::{ClientDirectory, PluginConfig, PluginStorage, TriggerSettings};
use hookline_webhook::{TriggerClient, TriggerConfig};
use tracing::{debug, instrument};

use crate::error::PluginError;

/// Storage key for the last response body.
pub const RESPONSE_KEY: &str = "response";

/// Storage key for the last dispatch timestamp.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Timestamp format for the stored dispatch record, e.g. `Aug 31, 2026 14:05:03`.
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y %H:%M:%S";

/// Hook parameters for a service-lifecycle event, passed in by the host
/// platform as plain data.
#[derive(Debug, Clone)]
pub struct Service {
    /// The service the hook fired for.
    pub service_id: ServiceId,

    /// The client that owns the service.
    pub client_id: ClientId,
}

impl Service {
    /// Create hook parameters from ids.
    #[must_use]
    pub fn new(service_id: impl Into<ServiceId>, client_id: impl Into<ClientId>) -> Self {
        Self {
            service_id: service_id.into(),
            client_id: client_id.into(),
        }
    }
}

/// The plugin facade the host's hook dispatcher calls into.
///
/// Holds the three host-collaborator seams behind trait objects plus the
/// webhook trigger client. Each hook invocation loads settings, looks up
/// the client, resolves the payload, dispatches it, and persists the
/// outcome. Any failure up to and including the dispatch propagates with
/// storage untouched, so the previously stored record survives a failed
/// attempt intact.
pub struct EventPlugin {
    directory: Arc<dyn ClientDirectory>,
    config: Arc<dyn PluginConfig>,
    storage: Arc<dyn PluginStorage>,
    trigger: TriggerClient,
}

impl EventPlugin {
    /// Create a plugin over the given host collaborators, with a default
    /// trigger client.
    #[must_use]
    pub fn new(
        directory: Arc<dyn ClientDirectory>,
        config: Arc<dyn PluginConfig>,
        storage: Arc<dyn PluginStorage>,
    ) -> Self {
        Self {
            directory,
            config,
            storage,
            trigger: TriggerClient::new(TriggerConfig::default()),
        }
    }

    /// Replace the trigger client (custom endpoint, timeout, or pooled
    /// `reqwest::Client`).
    #[must_use]
    pub fn with_trigger_client(mut self, trigger: TriggerClient) -> Self {
        self.trigger = trigger;
        self
    }

    /// Hook: fire the trigger event after a service is created.
    #[instrument(skip(self), fields(service = %service.service_id))]
    pub async fn on_service_created(&self, service: &Service) -> Result<(), PluginError> {
        self.send_event(service).await
    }

    /// Hook: fire the trigger event after a service is edited.
    #[instrument(skip(self), fields(service = %service.service_id))]
    pub async fn on_service_updated(&self, service: &Service) -> Result<(), PluginError> {
        self.send_event(service).await
    }

    /// The send-event pipeline shared by both lifecycle hooks.
    async fn send_event(&self, service: &Service) -> Result<(), PluginError> {
        // Fail fast on configuration before any lookup or network work.
        let settings = TriggerSettings::load(self.config.as_ref())?;

        let client = self.directory.lookup_client(&service.client_id).await?;
        let payload = resolve(&client, &settings.selectors);

        let response = self
            .trigger
            .dispatch(&settings.event, &settings.access_key, &payload)
            .await?;

        let record = DispatchRecord::new(
            response.text(),
            Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        );
        // The two writes are not atomic. Timestamp goes first so an attempt
        // that dies between them leaves a fresh timestamp next to the prior
        // response, which a reader can notice, instead of the reverse.
        self.storage.set(TIMESTAMP_KEY, &record.timestamp).await?;
        self.storage.set(RESPONSE_KEY, &record.response).await?;

        debug!(status = response.status, "stored trigger response");
        Ok(())
    }

    /// Read the last stored dispatch record, if any.
    pub(crate) async fn last_record(&self) -> Result<Option<DispatchRecord>, PluginError> {
        let Some(response) = self.storage.get(RESPONSE_KEY).await? else {
            return Ok(None);
        };
        let timestamp = self.storage.get(TIMESTAMP_KEY).await?.unwrap_or_default();
        Ok(Some(DispatchRecord::new(response, timestamp)))
    }

    pub(crate) fn settings(&self) -> Result<TriggerSettings, PluginError> {
        Ok(TriggerSettings::load(self.config.as_ref())?)
    }
}
