// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::transport::TransportError;

/// Failure of a remote call, by where it went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}\n  hint: check your connection and the configured api_url")]
    Transport(#[from] TransportError),

    /// The server answered, but with an error status, a `success: false`
    /// envelope, or a body that is not JSON.
    #[error("{}", describe(.status, .message))]
    Protocol {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The request was rejected locally before it was sent.
    #[error(transparent)]
    Validation(#[from] sf_core::Error),
}

fn describe(status: &Option<u16>, message: &Option<String>) -> String {
    let text = message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("something went wrong");
    match status {
        Some(code) => format!("server error ({code}): {text}"),
        None => format!("server error: {text}"),
    }
}

impl ClientError {
    pub fn protocol(status: Option<u16>, message: impl Into<String>) -> Self {
        ClientError::Protocol {
            status,
            message: Some(message.into()),
        }
    }

    /// Short text suitable for a user-facing notice.
    ///
    /// Prefers the server's own message; falls back to a generic one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Protocol {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            ClientError::Protocol { .. } => "Something went wrong".to_string(),
            ClientError::Transport(TransportError::Timeout) => "Request timed out".to_string(),
            ClientError::Transport(_) => "Could not reach the server".to_string(),
            ClientError::Validation(e) => {
                let text = e.to_string();
                text.lines().next().unwrap_or_default().to_string()
            }
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(TransportError::Timeout)
            | ClientError::Transport(TransportError::ConnectionFailed(_))
            | ClientError::Transport(TransportError::RequestFailed(_)) => true,
            ClientError::Protocol {
                status: Some(code), ..
            } => *code >= 500,
            _ => false,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
