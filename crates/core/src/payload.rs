use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::ClientRecord;

/// Number of payload value slots exposed by the host plugin configuration.
pub const MAX_PAYLOAD_FIELDS: usize = 3;

/// Ordered list of client-record field names selected by configuration.
///
/// The host configuration exposes [`MAX_PAYLOAD_FIELDS`] slots, but the type
/// itself handles any short list. An empty selector string is legal and
/// resolves to an empty payload value, which is how an unset configuration
/// slot keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelectors(Vec<String>);

impl FieldSelectors {
    /// Create selectors from an ordered list of field names.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// The selected field names, in payload order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Payload sent to the webhook trigger endpoint.
///
/// Serializes as a JSON object with positional keys `value1..valueN`, one
/// per selector, in order. Values may be empty strings; the keys are always
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerPayload {
    values: Vec<String>,
}

impl TriggerPayload {
    /// Build a payload from ordered values.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The payload values, in `value1..valueN` order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Serialize for TriggerPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (i, value) in self.values.iter().enumerate() {
            map.serialize_entry(&format!("value{}", i + 1), value)?;
        }
        map.end()
    }
}

/// Resolve configured field selectors against a client record.
///
/// Total: absent fields, empty fields, and empty selector names all resolve
/// to an empty string rather than an error. Values are taken verbatim; any
/// escaping happens at JSON serialization time.
#[must_use]
pub fn resolve(record: &ClientRecord, selectors: &FieldSelectors) -> TriggerPayload {
    let values = selectors
        .fields()
        .iter()
        .map(|field| record.get(field).unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    TriggerPayload { values }
}
