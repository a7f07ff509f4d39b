// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shop listings, details, reviews and ratings.

use std::io::Write;

use sf_client::{degrade, Transport};
use sf_core::forms::{RatingSubmission, VendorQuery};
use sf_core::{ResourceRef, ToggleState};

use crate::cli::{CategoryArgs, LocationArgs, OutputFormat};
use crate::display;
use crate::error::{Error, Result};

use super::{print_list, print_message, Context};

/// Picks the search location: explicit flags first, then the profile.
fn resolve_location<T: Transport>(
    ctx: &Context<T>,
    location: &LocationArgs,
) -> Result<(String, String)> {
    let state = ctx.store.state();
    let profile = state.user.as_ref();
    let pick = |flag: &Option<String>, fallback: Option<&String>| {
        flag.as_ref()
            .or(fallback)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    let city = pick(&location.city, profile.map(|u| &u.city));
    let region = pick(&location.state, profile.map(|u| &u.state));
    match (city, region) {
        (Some(city), Some(region)) => Ok((city, region)),
        _ => Err(Error::NoLocation),
    }
}

pub async fn list<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    location: &LocationArgs,
    category: &CategoryArgs,
) -> Result<()> {
    let (city, state) = resolve_location(ctx, location)?;
    let vendors = match category.category {
        Some(category_id) => {
            let query = VendorQuery::near(&city, &state).in_category(category_id, category.subcategory);
            ctx.api.vendors_by_category(&query).await?
        }
        None => ctx.api.vendors_near(&city, &state).await?,
    };
    let empty = format!("No shops found in {city}, {state}.");
    print_list(out, ctx.output, &vendors, &empty, display::vendor_line)
}

/// Shows one shop. When signed in, the bookmark marker reflects the
/// server's list; failing to load it only costs the marker.
pub async fn show<T: Transport>(ctx: &Context<T>, out: &mut dyn Write, id: i64) -> Result<()> {
    let vendor = ctx.api.vendor(id).await?.ok_or(Error::VendorNotFound(id))?;

    let bookmark = match ctx.store.state().user_id() {
        Some(user_id) => {
            let handle = ctx.bookmark_set();
            let loaded = ctx.api.load_bookmarks(&handle, user_id).await;
            degrade(loaded, "Could not load bookmarks", ctx.notices.as_ref());
            handle.state_of(&ResourceRef::Int(id))
        }
        None => ToggleState::ConfirmedInactive,
    };

    match ctx.output {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&vendor)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("bookmarked".into(), bookmark.is_active().into());
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            let asset_base = ctx.api.client().config().asset_url.as_str();
            writeln!(out, "{}", display::vendor_details(&vendor, asset_base, bookmark))?;
        }
    }
    Ok(())
}

pub async fn reviews<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    vendor_id: i64,
) -> Result<()> {
    let reviews = ctx.api.reviews(vendor_id).await?;
    print_list(
        out,
        ctx.output,
        &reviews,
        "No reviews yet.",
        display::review_block,
    )
}

pub async fn rate<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    vendor_id: i64,
    stars: u8,
    review: Option<&str>,
) -> Result<()> {
    let user = ctx.require_user()?;
    let submission = RatingSubmission {
        user_id: user.id,
        vendor_id,
        rating: stars,
        review: review.unwrap_or_default().trim().to_string(),
    };
    let message = ctx.api.rate_vendor(&submission).await?;
    print_message(out, ctx.output, message, "Thanks for your rating")
}

#[cfg(test)]
#[path = "shops_tests.rs"]
mod tests;
