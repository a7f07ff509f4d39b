// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens on the discard port, so a request fails fast.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

/// A temporary home for config and session files.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join("state").join("session.json")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    /// Stores a signed-in session for user 7.
    pub fn log_in(&self) {
        let path = self.session_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            path,
            r#"{ "user": { "id": 7, "name": "Asha", "city": "Pune", "state": "MH" } }"#,
        )
        .unwrap();
    }

    pub fn session(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.session_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// The CLI, isolated from the user's environment and pointed at `api_url`.
    pub fn cmd(&self, api_url: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("storefront");
        cmd.env("STOREFRONT_CONFIG", self.config_path())
            .env("STOREFRONT_STATE_DIR", self.dir.path().join("state"))
            .env("STOREFRONT_API_URL", api_url)
            .env_remove("STOREFRONT_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Serves each canned JSON body to one request, in order, then stops.
/// The join handle yields the raw requests.
pub fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().unwrap();
            seen.push(read_request(&mut socket));
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).unwrap();
        }
        seen
    });
    (format!("http://{addr}/api"), handle)
}

fn read_request(socket: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).unwrap();
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
