// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for client tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::client::{ClientConfig, RemoteResourceClient};
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportResult};
use crate::StorefrontApi;

pub const API_URL: &str = "http://test.local/api";

/// Mock transport for testing without real sockets.
///
/// Responses are returned in the order they were queued. Once the queue is
/// empty, every request fails with a connection error.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<TransportResult<HttpResponse>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response carrying `body` as JSON.
    pub fn respond_json(&self, body: Value) -> &Self {
        self.respond(200, body.to_string())
    }

    /// Queue a raw response.
    pub fn respond(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, err: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// All requests executed so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no scripted response".into())))
        })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        api_url: API_URL.to_string(),
        asset_url: "http://test.local/uploads".to_string(),
        ..ClientConfig::default()
    }
}

/// A client over a fresh mock; the mock is a shared handle onto its queue.
pub fn mock_client() -> (RemoteResourceClient<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let client = RemoteResourceClient::with_transport(test_config(), transport.clone());
    (client, transport)
}

pub fn mock_api() -> (StorefrontApi<MockTransport>, MockTransport) {
    let (client, transport) = mock_client();
    (StorefrontApi::new(client), transport)
}
