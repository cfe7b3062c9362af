//! SL API client
//!
//! Issues authenticated GET requests against the SL API and decodes the JSON
//! envelopes. Transport internals (TLS, connection pooling, DNS) stay inside
//! `reqwest`; retry policy, if any, is the caller's responsibility.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::SlConfig;
use crate::error::SlError;
use crate::query::{QueryPairs, build_url, redact_key};

/// Client for the SL transit API
///
/// Holds the HTTP transport and the immutable configuration. All per-call
/// state lives on the stack of the call, so a single client serves
/// concurrent callers without synchronization. Dropping the future of an
/// operation cancels its in-flight request.
#[derive(Debug)]
pub struct SlClient {
    http: Client,
    base_url: Url,
    config: SlConfig,
}

impl SlClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Fails when the configured base URL lacks its trailing slash or does
    /// not parse, or when the HTTP client cannot be initialized. No request
    /// can be issued through a misconfigured client.
    pub fn new(config: &SlConfig) -> Result<Self, SlError> {
        if !config.base_url.ends_with('/') {
            return Err(SlError::MissingTrailingSlash);
        }

        let base_url =
            Url::parse(&config.base_url).map_err(|e| SlError::InvalidBaseUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| SlError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            config: config.clone(),
        })
    }

    /// Create a client with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, SlError> {
        Self::new(&SlConfig::default())
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &SlConfig {
        &self.config
    }

    /// Perform a GET request and decode the JSON envelope.
    ///
    /// An empty body is not an error: the SL API answers some error statuses
    /// with no content at all, and those decode to the zero-value envelope.
    /// The envelope's own error indicator is the error signal here, not the
    /// HTTP status code.
    pub(crate) async fn get_json<T>(&self, endpoint: &str, query: QueryPairs) -> Result<T, SlError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send(endpoint, &query).await?;

        // Reading the body to completion on every path lets the connection
        // return to the pool.
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if body.is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&body).map_err(|e| SlError::Parse(e.to_string()))
    }

    /// Perform a GET request and return the body bytes verbatim, with no
    /// JSON interpretation. Escape hatch for callers that want the raw
    /// payload of an endpoint.
    pub async fn get_raw(&self, endpoint: &str, query: QueryPairs) -> Result<Vec<u8>, SlError> {
        let response = self.send(endpoint, &query).await?;
        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, endpoint: &str, query: &QueryPairs) -> Result<reqwest::Response, SlError> {
        let url = build_url(&self.base_url, endpoint, query)?;

        debug!(url = %redact_key(url.clone()), "sending request");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(status = %response.status(), "response received");

        Ok(response)
    }

    /// Map a transport failure. Timeouts take precedence over the generic
    /// classification, and the API key is redacted from any URL the error
    /// carries before it can reach a caller or a log line.
    fn transport_error(&self, mut error: reqwest::Error) -> SlError {
        if error.is_timeout() {
            return SlError::Timeout {
                timeout_secs: self.config.timeout_secs,
            };
        }

        if let Some(url) = error.url_mut() {
            *url = redact_key(url.clone());
        }

        if error.is_connect() {
            SlError::ConnectionFailed(error.to_string())
        } else {
            SlError::RequestFailed(error.to_string())
        }
    }
}
