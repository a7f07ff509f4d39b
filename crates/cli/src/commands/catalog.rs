// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only catalog listings: categories, locations, announcements.

use std::io::Write;

use sf_client::Transport;

use crate::display;
use crate::error::Result;

use super::{print_list, print_one, Context};

pub async fn categories<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    let categories = ctx.api.categories().await?;
    print_list(
        out,
        ctx.output,
        &categories,
        "No categories.",
        display::category_line,
    )
}

pub async fn subcategories<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    category_id: i64,
) -> Result<()> {
    let subcategories = ctx.api.subcategories(category_id).await?;
    print_list(
        out,
        ctx.output,
        &subcategories,
        "No subcategories.",
        display::subcategory_line,
    )
}

pub async fn states<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    let states = ctx.api.states().await?;
    print_list(out, ctx.output, &states, "No states.", String::clone)
}

pub async fn cities<T: Transport>(
    ctx: &Context<T>,
    out: &mut dyn Write,
    state: &str,
) -> Result<()> {
    let cities = ctx.api.cities(state.trim()).await?;
    let empty = format!("No cities in {}.", state.trim());
    print_list(out, ctx.output, &cities, &empty, String::clone)
}

pub async fn notifications<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    let notifications = ctx.api.notifications().await?;
    print_list(
        out,
        ctx.output,
        &notifications,
        "No notifications.",
        display::notification_block,
    )
}

pub async fn about<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    let page = ctx.api.about_page().await?;
    print_one(out, ctx.output, &page, |page| {
        let body = display::page_text(&page.content);
        match page.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => format!("{title}\n\n{body}"),
            None => body,
        }
    })
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
