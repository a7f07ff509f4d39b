// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of server response bodies.
//!
//! The backend wraps payloads in `{ success, message?, data? }` for some
//! endpoints and uses a domain key (`categories`, `vendor`, `reviews`, ...)
//! for others; a few list endpoints return a bare JSON array. [`Envelope`]
//! turns any of these into one of three variants, and its accessors fall
//! back to empty collections instead of failing when a key is absent or
//! malformed.

use serde::de::DeserializeOwned;
use serde_json::Value;

const SUCCESS_KEY: &str = "success";
const MESSAGE_KEY: &str = "message";

/// A response body, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Success carrying payload fields, or a bare array.
    Payload {
        message: Option<String>,
        body: Value,
    },
    /// Success with nothing beyond status fields (including `{}`).
    Empty { message: Option<String> },
    /// The server reported `success: false`.
    Failure { message: Option<String> },
}

impl Envelope {
    /// Classifies a decoded JSON body.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(_) => Envelope::Payload {
                message: None,
                body,
            },
            Value::Object(ref map) => {
                let message = map
                    .get(MESSAGE_KEY)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if map.get(SUCCESS_KEY).and_then(Value::as_bool) == Some(false) {
                    return Envelope::Failure { message };
                }
                let has_payload = map
                    .keys()
                    .any(|k| k != SUCCESS_KEY && k != MESSAGE_KEY);
                if has_payload {
                    Envelope::Payload { message, body }
                } else {
                    Envelope::Empty { message }
                }
            }
            Value::String(s) => Envelope::Empty { message: Some(s) },
            _ => Envelope::Empty { message: None },
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Payload { message, .. }
            | Envelope::Empty { message }
            | Envelope::Failure { message } => message.as_deref(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Envelope::Failure { .. })
    }

    /// Returns the raw value under `key`, if this is a payload object.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Envelope::Payload { body, .. } => body.get(key),
            _ => None,
        }
    }

    /// Extracts a list from the first of `keys` that holds an array.
    ///
    /// A bare-array body is used directly. Elements that do not decode as
    /// `T` are skipped. Missing keys, non-array values, empty and failure
    /// envelopes all yield an empty vector.
    pub fn list<T: DeserializeOwned>(&self, keys: &[&str]) -> Vec<T> {
        let Envelope::Payload { body, .. } = self else {
            return Vec::new();
        };

        let items = match body {
            Value::Array(items) => Some(items),
            _ => keys
                .iter()
                .find_map(|k| body.get(*k).and_then(Value::as_array)),
        };

        items
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extracts a single object stored under `key`.
    pub fn object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.field(key)
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Follows a path of keys (`["data", "content"]`) to a string.
    pub fn text_at(&self, path: &[&str]) -> Option<String> {
        let Envelope::Payload { body, .. } = self else {
            return None;
        };
        let mut cursor = body;
        for key in path {
            cursor = cursor.get(*key)?;
        }
        cursor.as_str().map(str::to_string)
    }
}

impl From<Value> for Envelope {
    fn from(body: Value) -> Self {
        Envelope::classify(body)
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
