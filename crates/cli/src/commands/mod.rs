// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod account;
pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod shops;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use serde::Serialize;
use sf_client::{
    HttpTransport, Notice, NoticeLevel, NoticeSink, OptimisticHandle, SessionStore, StorefrontApi,
    Transport,
};
use sf_core::{AppState, User};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

/// Prints notices to stderr as they are raised.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotices;

impl NoticeSink for StderrNotices {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => eprintln!("{}: {}", notice.title, notice.message),
            NoticeLevel::Error => eprintln!("error: {}: {}", notice.title, notice.message),
        }
    }
}

/// Everything a command needs: configuration, API access, and the session.
pub struct Context<T: Transport = HttpTransport> {
    pub config: Config,
    pub api: StorefrontApi<T>,
    pub store: SessionStore,
    pub output: OutputFormat,
    pub notices: Box<dyn NoticeSink>,
}

impl Context<HttpTransport> {
    /// Builds an HTTP-backed context. No request is made here.
    pub fn connect(config: Config, session: AppState, output: OutputFormat) -> Result<Self> {
        let api = StorefrontApi::connect(config.client_config())?;
        Ok(Context::with_api(config, api, session, output))
    }
}

impl<T: Transport> Context<T> {
    pub fn with_api(
        config: Config,
        api: StorefrontApi<T>,
        session: AppState,
        output: OutputFormat,
    ) -> Self {
        Context {
            config,
            api,
            store: SessionStore::new(session),
            output,
            notices: Box::new(StderrNotices),
        }
    }

    /// The signed-in user, or [`Error::NotLoggedIn`].
    pub fn require_user(&self) -> Result<User> {
        self.store.state().user.clone().ok_or(Error::NotLoggedIn)
    }

    /// A fresh bookmark set using the configured settlement policy.
    pub fn bookmark_set(&self) -> OptimisticHandle {
        OptimisticHandle::with_policy(self.config.toggle.policy)
    }
}

/// Writes `items` as pretty JSON, or one rendered entry per line.
pub fn print_list<T: Serialize>(
    out: &mut dyn Write,
    output: OutputFormat,
    items: &[T],
    empty: &str,
    render: impl Fn(&T) -> String,
) -> Result<()> {
    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(items)?)?,
        OutputFormat::Text if items.is_empty() => writeln!(out, "{empty}")?,
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", render(item))?;
            }
        }
    }
    Ok(())
}

/// Writes a single record.
pub fn print_one<T: Serialize>(
    out: &mut dyn Write,
    output: OutputFormat,
    item: &T,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(item)?)?,
        OutputFormat::Text => writeln!(out, "{}", render(item))?,
    }
    Ok(())
}

/// Writes the server's confirmation message, or `fallback` when it sent none.
pub fn print_message(
    out: &mut dyn Write,
    output: OutputFormat,
    message: Option<String>,
    fallback: &str,
) -> Result<()> {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "message": message }))?,
        OutputFormat::Text => writeln!(out, "{message}")?,
    }
    Ok(())
}
