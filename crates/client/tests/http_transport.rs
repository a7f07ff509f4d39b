// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HttpTransport against a local one-shot HTTP stub.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::time::Duration;

use serde_json::json;
use sf_client::{
    ClientConfig, ClientError, HttpTransport, NoticeLog, OptimisticHandle, RemoteResourceClient,
    StorefrontApi, TransportError,
};
use sf_core::{Payload, ResourceRef};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one request with `status` and `body`, returning the raw
/// request text from the join handle.
struct Stub {
    url: String,
    request: JoinHandle<String>,
}

async fn stub(status: u16, content_type: &'static str, body: &'static str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().unwrap();

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let raw = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status} X\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        raw
    });

    Stub {
        url: format!("http://{addr}/api"),
        request,
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(url: &str) -> RemoteResourceClient<HttpTransport> {
    RemoteResourceClient::new(ClientConfig {
        api_url: url.to_string(),
        timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn get_sends_query_string() {
    let stub = stub(200, "application/json", r#"{"cities":["Pune"]}"#).await;
    let client = client_for(&stub.url);

    let body = client
        .fetch_resource("cities", &[("state", "Tamil Nadu")])
        .await
        .unwrap();
    assert_eq!(body, json!({"cities": ["Pune"]}));

    let raw = stub.request.await.unwrap();
    assert!(raw.starts_with("GET /api/cities?state=Tamil+Nadu "), "{raw}");
}

#[tokio::test]
async fn delete_sends_json_body() {
    let stub = stub(200, "application/json", r#"{"success":true}"#).await;
    let client = client_for(&stub.url);

    client
        .delete_resource(
            "bookmark/remove",
            Payload::Json(json!({"user_id": 7, "vendor_id": 42})),
        )
        .await
        .unwrap();

    let raw = stub.request.await.unwrap();
    assert!(raw.starts_with("DELETE /api/bookmark/remove "), "{raw}");
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"user_id":7,"vendor_id":42}"#), "{raw}");
}

#[tokio::test]
async fn html_error_page_is_protocol_error() {
    let stub = stub(500, "text/html", "<h1>oops</h1>").await;
    let client = client_for(&stub.url);

    let err = client.fetch_resource("categories", &[]).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Protocol {
            status: Some(500),
            ..
        }
    ));
    stub.request.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // Bind then drop so the port is very likely closed.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(&format!("http://{addr}/api"));

    let err = client.fetch_resource("categories", &[]).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::ConnectionFailed(_))
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn bookmark_toggle_over_http_rolls_back() {
    let stub = stub(
        404,
        "application/json",
        r#"{"success":false,"message":"Vendor not found"}"#,
    )
    .await;
    let api = StorefrontApi::new(client_for(&stub.url));
    let handle = OptimisticHandle::new();
    let log = NoticeLog::new();

    let outcome = api
        .toggle_bookmark(&handle, 7, ResourceRef::from(42), &log)
        .await;

    assert!(outcome.is_rolled_back());
    assert!(handle.snapshot().is_empty());
    assert_eq!(log.errors()[0].message, "Vendor not found");
    let raw = stub.request.await.unwrap();
    assert!(raw.starts_with("POST /api/bookmark/add "));
}
