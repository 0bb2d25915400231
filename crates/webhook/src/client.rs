use std::collections::HashMap;
use std::io::Read;

use bytes::Bytes;
use flate2::read::GzDecoder;
use hookline_core::{EventName, TriggerPayload};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, instrument, warn};

use crate::config::TriggerConfig;
use crate::error::DispatchError;
use crate::response::{TriggerResponse, parse_filename};

/// First two bytes of a gzip stream.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// Content type that marks the body as a gzip *file* to be passed through
/// untouched rather than a transparently compressed response.
const GZIP_FILE_CONTENT_TYPE: &str = "application/x-gzip";

/// RFC 3986 unreserved characters stay literal; everything else is escaped
/// when the event name and access key are embedded as path segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for firing webhook trigger events.
///
/// One [`dispatch`](Self::dispatch) call is one synchronous request-response
/// cycle: no internal retry, no backoff, no shared state across calls. The
/// underlying connection is scoped to the call and released on every exit
/// path.
pub struct TriggerClient {
    config: TriggerConfig,
    http: reqwest::Client,
}

impl TriggerClient {
    /// Create a client with the given configuration.
    ///
    /// Builds a `reqwest::Client` with the configured timeout, redirect cap,
    /// and user agent.
    #[must_use]
    pub fn new(config: TriggerConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to build HTTP client");

        Self { config, http }
    }

    /// Create a client with a custom `reqwest::Client`.
    ///
    /// Useful for testing or for sharing a connection pool. The caller is
    /// responsible for configuring timeout and redirect policy on the
    /// supplied client.
    #[must_use]
    pub fn with_client(config: TriggerConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Build the trigger URL for an event and access key.
    ///
    /// Fails with [`DispatchError::Configuration`] if either value is empty
    /// rather than constructing a malformed URL.
    pub fn trigger_url(&self, event: &EventName, key: &str) -> Result<String, DispatchError> {
        if event.as_str().is_empty() {
            return Err(DispatchError::Configuration(
                "no trigger event specified".into(),
            ));
        }
        if key.is_empty() {
            return Err(DispatchError::Configuration(
                "no access key specified".into(),
            ));
        }

        Ok(format!(
            "{}/trigger/{}/with/key/{}",
            self.config.base_url.trim_end_matches('/'),
            utf8_percent_encode(event.as_str(), PATH_SEGMENT),
            utf8_percent_encode(key, PATH_SEGMENT),
        ))
    }

    /// Fire a trigger event with the given payload.
    ///
    /// Posts the payload as a JSON object to the trigger URL. Any HTTP
    /// status is a result; only transport-level failures (connect, TLS,
    /// timeout) are errors, surfaced as [`DispatchError::Transport`] with
    /// the underlying error text. The caller decides whether to retry.
    #[instrument(skip(self, key, payload), fields(event = %event))]
    pub async fn dispatch(
        &self,
        event: &EventName,
        key: &str,
        payload: &TriggerPayload,
    ) -> Result<TriggerResponse, DispatchError> {
        // Validate before any network work.
        let url = self.trigger_url(event, key)?;

        debug!(base_url = %self.config.base_url, "dispatching trigger event");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("trigger request timed out");
                }
                DispatchError::Transport(e)
            })?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_owned())))
            .collect();
        let content_type = headers.get("content-type").cloned();
        let content_filename = headers.values().find_map(|value| parse_filename(value));

        let raw = response.bytes().await?;

        debug!(status, bytes = raw.len(), "trigger response received");

        let (body, decompressed) = decode_body(raw, content_type.as_deref())?;

        Ok(TriggerResponse {
            status,
            headers,
            content_type,
            content_length: body.len() as u64,
            content_filename,
            decompressed,
            body,
        })
    }
}

/// Transparently decompress a response body that starts with the gzip magic
/// bytes, unless the endpoint declared it as a gzip file.
///
/// Guards against endpoints that compress a response without saying so,
/// while leaving a legitimately-gzip download untouched.
fn decode_body(
    raw: Bytes,
    content_type: Option<&str>,
) -> Result<(Bytes, bool), DispatchError> {
    if content_type == Some(GZIP_FILE_CONTENT_TYPE) || !raw.starts_with(GZIP_MAGIC) {
        return Ok((raw, false));
    }

    let mut inflated = Vec::new();
    GzDecoder::new(raw.as_ref()).read_to_end(&mut inflated)?;
    debug!(
        compressed = raw.len(),
        decompressed = inflated.len(),
        "decompressed undeclared gzip response body"
    );
    Ok((Bytes::from(inflated), true))
}
