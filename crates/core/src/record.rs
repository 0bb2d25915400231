use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Field map describing a client entity, as returned by the host platform's
/// client directory.
///
/// Read-only to this plugin: fields are forwarded verbatim into trigger
/// payloads, never transformed or written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientRecord {
    fields: HashMap<String, String>,
}

impl ClientRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by name. Returns `None` if the field is absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Insert a field, overwriting any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, String>> for ClientRecord {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClientRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
