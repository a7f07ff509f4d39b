// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sf-core operations.

use thiserror::Error;

/// Errors raised before any request leaves the client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("invalid rating: {0}\n  hint: ratings are whole stars from 1 to 5")]
    InvalidRating(u8),

    #[error("invalid resource reference: '{0}'\n  hint: use a numeric id or a non-empty name")]
    InvalidRef(String),

    #[error("invalid toggle policy: '{0}'\n  hint: valid policies are: last-settled, latest-issued")]
    InvalidPolicy(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: user, vendor, sales")]
    InvalidRole(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
