use dashmap::DashMap;
use hookline_core::{EventName, FieldSelectors, MAX_PAYLOAD_FIELDS};

use crate::error::HostError;

/// Configuration key for the trigger event name.
pub const EVENT_KEY: &str = "maker_event";

/// Configuration key for the webhook access key.
pub const ACCESS_KEY: &str = "maker_key";

/// Raw plugin-configuration reads, as persisted by the host platform.
///
/// Reads are plain property lookups in the host SDK, so the trait is
/// synchronous. Typed access goes through [`TriggerSettings::load`].
pub trait PluginConfig: Send + Sync {
    /// Read a configuration value by key. Returns `None` if unset.
    fn value(&self, key: &str) -> Option<String>;
}

/// In-memory [`PluginConfig`] backed by a [`DashMap`].
#[derive(Debug, Default)]
pub struct MemoryConfig {
    values: DashMap<String, String>,
}

impl MemoryConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration value, overwriting any previous one.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl PluginConfig for MemoryConfig {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|entry| entry.value().clone())
    }
}

/// Typed trigger settings parsed from plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSettings {
    /// Trigger event name embedded in the webhook URL.
    pub event: EventName,

    /// Webhook access key embedded in the webhook URL.
    pub access_key: String,

    /// Client-record fields forwarded as payload values, in slot order.
    pub selectors: FieldSelectors,
}

impl TriggerSettings {
    /// Load and validate settings from raw plugin configuration.
    ///
    /// `maker_event` and `maker_key` are required; an absent or empty value
    /// fails with [`HostError::MissingConfig`] naming the key, before any
    /// lookup or network work happens. The `value1..value3` slots are
    /// optional; an unset slot keeps its position as an empty selector so
    /// the wire payload always carries all three keys.
    pub fn load(config: &dyn PluginConfig) -> Result<Self, HostError> {
        let event = require(config, EVENT_KEY)?;
        let access_key = require(config, ACCESS_KEY)?;

        let selectors = FieldSelectors::new(
            (1..=MAX_PAYLOAD_FIELDS)
                .map(|slot| config.value(&format!("value{slot}")).unwrap_or_default()),
        );

        Ok(Self {
            event: EventName::new(event),
            access_key,
            selectors,
        })
    }
}

/// Read a required configuration value, treating empty as missing.
fn require(config: &dyn PluginConfig, key: &str) -> Result<String, HostError> {
    match config.value(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(HostError::MissingConfig(key.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> MemoryConfig {
        let config = MemoryConfig::new();
        config.set(EVENT_KEY, "service_created");
        config.set(ACCESS_KEY, "KEY123");
        config.set("value1", "email");
        config.set("value2", "clientid");
        config.set("value3", "first");
        config
    }

    #[test]
    fn load_full_settings() {
        let settings = TriggerSettings::load(&full_config()).unwrap();
        assert_eq!(settings.event.as_str(), "service_created");
        assert_eq!(settings.access_key, "KEY123");
        assert_eq!(
            settings.selectors.fields(),
            &["email", "clientid", "first"]
        );
    }

    #[test]
    fn missing_event_names_the_key() {
        let config = full_config();
        config.set(EVENT_KEY, "");
        let err = TriggerSettings::load(&config).unwrap_err();
        assert!(matches!(err, HostError::MissingConfig(ref key) if key == EVENT_KEY));
    }

    #[test]
    fn missing_access_key_names_the_key() {
        let config = MemoryConfig::new();
        config.set(EVENT_KEY, "service_created");
        let err = TriggerSettings::load(&config).unwrap_err();
        assert!(matches!(err, HostError::MissingConfig(ref key) if key == ACCESS_KEY));
    }

    #[test]
    fn unset_value_slot_keeps_its_position() {
        let config = full_config();
        config.set("value2", "");
        let settings = TriggerSettings::load(&config).unwrap();
        assert_eq!(settings.selectors.fields(), &["email", "", "first"]);
        assert_eq!(settings.selectors.len(), MAX_PAYLOAD_FIELDS);
    }
}
