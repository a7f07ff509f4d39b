// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use sf_client::ClientError;
use thiserror::Error;

/// All errors the `storefront` command can report.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not logged in\n  hint: run 'storefront login --mobile <number>' first")]
    NotLoggedIn,

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("no config directory found\n  hint: set STOREFRONT_CONFIG to a file path")]
    NoConfigDir,

    #[error("no state directory found\n  hint: set STOREFRONT_STATE_DIR to a writable directory")]
    NoStateDir,

    #[error("shop not found: {0}")]
    VendorNotFound(i64),

    #[error("no location to search\n  hint: pass --city and --state, or log in with a profile that has both")]
    NoLocation,

    #[error("config file already exists: {}\n  hint: pass --force to overwrite it", .0.display())]
    ConfigExists(PathBuf),

    #[error("bookmark for shop {0} was not updated\n  hint: run 'storefront bookmarks' to see the current list")]
    BookmarkNotUpdated(String),

    /// Already shown to the user as a notice; only the exit status remains.
    #[error("{0}")]
    Reported(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] sf_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the message was already printed by a notice sink.
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::Reported(_))
    }
}

/// A specialized Result type for storefront CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
