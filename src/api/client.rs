//! Exchange HTTP Client — Signed Request Dispatch
//!
//! Wraps reqwest for the handful of REST calls the CLI makes. Every call
//! captures one timestamp, signs with it, and sends the same string in
//! the `cb-access-timestamp` header. API error payloads are surfaced
//! verbatim so the operator sees exactly what the server said.

use anyhow::{Context, Result};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::auth::RequestSigner;

/// Errors from a single exchange call.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The HTTP call itself failed (DNS, TLS, connect, decode).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        status: StatusCode,
        /// Raw response body, relayed verbatim.
        message: String,
    },
}

/// A fully signed request, ready for dispatch.
///
/// `timestamp` is captured exactly once and shared by the signature input
/// and the `cb-access-timestamp` header; recomputing it between the two
/// invalidates the signature.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: Method,
    /// Path with leading slash, relative to the configured origin.
    pub path: String,
    /// Exact JSON text to transmit, or empty for bodyless requests.
    pub body: String,
    pub timestamp: String,
    pub signature: String,
}

/// Signed HTTP client for the exchange REST API.
pub struct ExchangeClient {
    http: Client,
    signer: RequestSigner,
    base_url: String,
}

impl ExchangeClient {
    /// Create a client for the given origin.
    ///
    /// No request timeout is configured; the transport default applies.
    pub fn new(signer: RequestSigner, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            signer,
            base_url,
        })
    }

    /// Assemble a signed request without sending it.
    pub fn build_request(&self, method: Method, path: &str, body: &str) -> SignedRequest {
        let timestamp = RequestSigner::timestamp();
        let signature = self.signer.sign(&timestamp, method.as_str(), path, body);

        SignedRequest {
            method,
            path: path.to_string(),
            body: body.to_string(),
            timestamp,
            signature,
        }
    }

    /// GET `path` and parse the JSON response.
    pub async fn get(&self, path: &str) -> Result<Value, ExchangeError> {
        self.send(self.build_request(Method::GET, path, "")).await
    }

    /// POST `body` to `path` and parse the JSON response.
    ///
    /// `body` must be the exact JSON text to transmit. It is signed and
    /// sent byte-for-byte; re-serializing it here could reorder or
    /// reformat fields and break the signature.
    pub async fn post(&self, path: &str, body: &str) -> Result<Value, ExchangeError> {
        self.send(self.build_request(Method::POST, path, body)).await
    }

    /// Dispatch one signed request.
    ///
    /// No retries: every command is a single all-or-nothing call.
    async fn send(&self, request: SignedRequest) -> Result<Value, ExchangeError> {
        let url = format!("{}{}", self.base_url, request.path);

        debug!(method = %request.method, url = %url, "Dispatching signed request");

        let mut builder = self
            .http
            .request(request.method, &url)
            .header("Content-Type", "application/json")
            .header("cb-access-key", self.signer.api_key())
            .header("cb-access-passphrase", self.signer.passphrase())
            .header("cb-access-timestamp", &request.timestamp)
            .header("cb-access-sign", &request.signature);

        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExchangeError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
