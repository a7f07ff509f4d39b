// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sign-in, sign-out, profile and feedback.
//!
//! These commands change the session through [`SessionStore::dispatch`];
//! persisting the result is left to the caller.
//!
//! [`SessionStore::dispatch`]: sf_client::SessionStore::dispatch

use std::io::Write;

use sf_client::Transport;
use sf_core::forms::{Credentials, Feedback};
use sf_core::Action;

use crate::display;
use crate::error::Result;

use super::{print_message, print_one, Context};

pub async fn login<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    mobile: &str,
    password: &str,
) -> Result<()> {
    let credentials = Credentials {
        mobile: mobile.trim().to_string(),
        password: password.to_string(),
        device_token: None,
    };
    let user = ctx.api.login(&credentials).await?;
    tracing::debug!(user_id = user.id, "signed in");
    let name = user.name.clone();
    ctx.store.dispatch(Action::SetUser(user));
    print_message(out, ctx.output, None, &format!("Logged in as {name}"))
}

pub fn logout<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    if !ctx.store.state().is_logged_in() {
        return print_message(out, ctx.output, None, "Not logged in");
    }
    ctx.store.dispatch(Action::Logout);
    print_message(out, ctx.output, None, "Logged out")
}

/// Refreshes the stored profile from the server, then prints it.
pub async fn profile<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    ctx.require_user()?;
    if !ctx.api.sync_profile(&ctx.store).await? {
        tracing::warn!("server returned no profile, showing the stored one");
    }
    let user = ctx.require_user()?;
    print_one(out, ctx.output, &user, display::profile_block)
}

pub async fn feedback<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    subject: &str,
    message: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let state = ctx.store.state();
    let profile = state.user.as_ref();
    let feedback = Feedback {
        name: name
            .map(str::to_string)
            .or_else(|| profile.map(|u| u.name.clone()))
            .unwrap_or_default(),
        email: email
            .map(str::to_string)
            .or_else(|| profile.map(|u| u.email.clone()))
            .unwrap_or_default(),
        subject: subject.to_string(),
        message: message.to_string(),
    };
    let reply = ctx.api.send_feedback(&feedback).await?;
    print_message(out, ctx.output, reply, "Thanks for your feedback")
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
