// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use sf_client::{ToggleOutcome, Transport};
use sf_core::{Bookmark, ResourceRef};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::{Error, Result};

use super::{print_list, Context};

fn bookmark_line(bookmark: &Bookmark) -> String {
    match &bookmark.vendor {
        Some(vendor) => display::vendor_line(vendor),
        None => format!("{:>4}  (shop details unavailable)", bookmark.vendor_id),
    }
}

pub async fn list<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    let user = ctx.require_user()?;
    let bookmarks = ctx.api.bookmarks(user.id).await?;
    print_list(
        out,
        ctx.output,
        &bookmarks,
        "No bookmarks yet.",
        bookmark_line,
    )
}

/// Flips the bookmark on `vendor`.
///
/// The current membership is loaded first so the toggle knows which way
/// to go. A failed commit is rolled back and reported through the notice
/// sink, so the returned error carries no further text for the user.
pub async fn toggle<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    vendor: &str,
) -> Result<()> {
    let user = ctx.require_user()?;
    let reference = ResourceRef::parse(vendor.trim())?;
    let handle = ctx.bookmark_set();
    ctx.api.load_bookmarks(&handle, user.id).await?;

    let outcome = ctx
        .api
        .toggle_bookmark(&handle, user.id, reference, ctx.notices.as_ref())
        .await;
    let (reference, active) = settled(outcome)?;
    match ctx.output {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "vendor": reference, "bookmarked": active })
        )?,
        OutputFormat::Text if active => writeln!(out, "Bookmarked shop {reference}")?,
        OutputFormat::Text => writeln!(out, "Removed bookmark for shop {reference}")?,
    }
    Ok(())
}

/// The confirmed membership, or the error to exit with.
///
/// Only a rollback raises a notice; the other failures still need their
/// `error:` line.
fn settled(outcome: ToggleOutcome) -> Result<(ResourceRef, bool)> {
    match outcome {
        ToggleOutcome::Confirmed { reference, active } => Ok((reference, active)),
        ToggleOutcome::RolledBack { error, .. } => Err(Error::Reported(error.user_message())),
        ToggleOutcome::Superseded { reference, error }
        | ToggleOutcome::Detached { reference, error } => {
            tracing::warn!(%reference, ?error, "bookmark toggle settled without an owner");
            Err(Error::BookmarkNotUpdated(reference.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "bookmarks_tests.rs"]
mod tests;
