// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response exchanges against the storefront REST service.
//!
//! [`RemoteResourceClient`] joins paths onto the configured API base, hands
//! the request to a [`Transport`], and turns the response into JSON or a
//! typed [`ClientError`]. Envelope interpretation beyond "is this a failure"
//! is left to callers.

use std::time::Duration;

use serde_json::Value;
use sf_core::{AssetKind, Envelope, Payload};

use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpRequest, HttpTransport, Method, Transport};

/// Where the service lives and how long a call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin plus API prefix, e.g. `http://host:5050/api`.
    pub api_url: String,
    /// Origin plus static-asset prefix, e.g. `http://host:5050/uploads`.
    pub asset_url: String,
    /// Upper bound for every call.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: "http://localhost:5050/api".to_string(),
            asset_url: "http://localhost:5050/uploads".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the remote resource service.
pub struct RemoteResourceClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl RemoteResourceClient<HttpTransport> {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(RemoteResourceClient { config, transport })
    }
}

impl<T: Transport> RemoteResourceClient<T> {
    /// Create a client with a custom transport (for testing).
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        RemoteResourceClient { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Joins `path` onto the API base with exactly one slash between them.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolves a server-provided file name against the asset base.
    pub fn asset_url(&self, kind: AssetKind, file: &str) -> Option<String> {
        kind.resolve(&self.config.asset_url, file)
    }

    /// GET `path` with query pairs.
    pub async fn fetch_resource(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<Value> {
        let query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.send(Method::Get, path, query, Payload::Empty).await
    }

    /// POST `payload` to `path`.
    pub async fn submit_resource(&self, path: &str, payload: Payload) -> ClientResult<Value> {
        self.send(Method::Post, path, Vec::new(), payload).await
    }

    /// PUT `payload` to `path` as a full replacement.
    pub async fn update_resource(&self, path: &str, payload: Payload) -> ClientResult<Value> {
        self.send(Method::Put, path, Vec::new(), payload).await
    }

    /// DELETE `path`, carrying `payload` in the request body.
    pub async fn delete_resource(&self, path: &str, payload: Payload) -> ClientResult<Value> {
        self.send(Method::Delete, path, Vec::new(), payload).await
    }

    /// GET `path` and classify the body, failing on `success: false`.
    pub async fn fetch_envelope(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Envelope> {
        expect_success(self.fetch_resource(path, query).await?)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        payload: Payload,
    ) -> ClientResult<Value> {
        let request = HttpRequest {
            method,
            url: self.url_for(path),
            query,
            payload,
        };
        tracing::debug!(%method, path, "sending request");

        let response = self.transport.execute(request).await?;
        tracing::debug!(%method, path, status = response.status, "response received");

        let body = if response.body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&response.body) {
                Ok(body) => body,
                Err(_) if !response.is_success() => {
                    return Err(ClientError::Protocol {
                        status: Some(response.status),
                        message: None,
                    });
                }
                Err(e) => {
                    return Err(ClientError::protocol(
                        Some(response.status),
                        format!("invalid response body: {e}"),
                    ));
                }
            }
        };

        if !response.is_success() {
            let message = Envelope::classify(body).message().map(str::to_string);
            return Err(ClientError::Protocol {
                status: Some(response.status),
                message,
            });
        }

        Ok(body)
    }
}

/// Classifies `body`, turning a `success: false` envelope into an error.
pub fn expect_success(body: Value) -> ClientResult<Envelope> {
    match Envelope::classify(body) {
        Envelope::Failure { message } => Err(ClientError::Protocol {
            status: None,
            message,
        }),
        envelope => Ok(envelope),
    }
}
