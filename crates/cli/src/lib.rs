// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! storefront - browse local shops from the terminal.
//!
//! This crate provides the `storefront` CLI on top of [`sf_client`]. It
//! owns the pieces a terminal front end needs and the client does not:
//!
//! - [`Config`] - TOML settings (service URLs, timeout, toggle policy)
//! - [`SessionFile`] - the signed-in user, persisted between runs
//! - [`Error`] - CLI errors, wrapping client and validation failures
//!
//! Commands run against a [`SessionStore`](sf_client::SessionStore) seeded
//! from the session file. Any transition a command dispatches is written
//! back once it finishes.

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod session_file;

pub use cli::{CategoryArgs, Cli, Command, ConfigCommand, LocationArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use session_file::SessionFile;

use std::io::Write;

use sf_client::Transport;
use tokio::sync::broadcast::error::TryRecvError;

use commands::Context;

/// Execute a CLI invocation: load config and session, run the command,
/// then persist the session if the command changed it.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let session = SessionFile::open_default()?;
    let state = session.load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let ctx = Context::connect(config, state, cli.output)?;
    let mut updates = ctx.store.subscribe();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = runtime.block_on(dispatch(&ctx, cli.command, &mut out));

    if !matches!(updates.try_recv(), Err(TryRecvError::Empty)) {
        tracing::debug!(path = %session.path().display(), "saving session");
        session.save(&ctx.store.state())?;
    }
    result
}

async fn dispatch<T: Transport>(
    ctx: &Context<T>,
    command: Command,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Categories => commands::catalog::categories(ctx, out).await,
        Command::Subcategories { category } => {
            commands::catalog::subcategories(ctx, out, category).await
        }
        Command::States => commands::catalog::states(ctx, out).await,
        Command::Cities { state } => commands::catalog::cities(ctx, out, &state).await,
        Command::Notifications => commands::catalog::notifications(ctx, out).await,
        Command::About => commands::catalog::about(ctx, out).await,
        Command::Shops { location, category } => {
            commands::shops::list(ctx, out, &location, &category).await
        }
        Command::Shop { id } => commands::shops::show(ctx, out, id).await,
        Command::Reviews { vendor } => commands::shops::reviews(ctx, out, vendor).await,
        Command::Rate {
            vendor,
            stars,
            review,
        } => commands::shops::rate(ctx, out, vendor, stars, review.as_deref()).await,
        Command::Bookmarks => commands::bookmarks::list(ctx, out).await,
        Command::Bookmark { vendor } => commands::bookmarks::toggle(ctx, out, &vendor).await,
        Command::Login { mobile, password } => {
            commands::account::login(ctx, out, &mobile, &password).await
        }
        Command::Logout => commands::account::logout(ctx, out),
        Command::Profile => commands::account::profile(ctx, out).await,
        Command::Feedback {
            subject,
            message,
            name,
            email,
        } => {
            commands::account::feedback(
                ctx,
                out,
                &subject,
                &message,
                name.as_deref(),
                email.as_deref(),
            )
            .await
        }
        Command::Config(cmd) => {
            let path = config::config_path()?;
            commands::config::run(&cmd, &ctx.config, &path, ctx.output, out)
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
