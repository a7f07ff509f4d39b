// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of storefront records.

use chrono::{DateTime, NaiveDate};
use sf_core::{AssetKind, Category, Notification, Review, Subcategory, ToggleState, User, Vendor};

/// Maximum line width for wrapped prose (excluding indent).
const WRAP_WIDTH: usize = 76;

/// Renders a rating as five stars, rounding to the nearest whole star.
pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Shortens a server timestamp to its calendar date.
///
/// Accepts RFC 3339 or a bare `YYYY-MM-DD`; anything else is shown as-is.
pub fn short_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

/// Greedy word wrap. Text that already contains line breaks is kept as is.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') {
        return content.to_string();
    }
    let mut lines: Vec<String> = Vec::new();
    for word in content.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn category_line(category: &Category) -> String {
    format!("{:>4}  {}", category.id, category.name)
}

pub fn subcategory_line(subcategory: &Subcategory) -> String {
    format!("{:>4}  {}", subcategory.id, subcategory.name)
}

/// One-line shop summary: `id  name  (city)  stars`.
pub fn vendor_line(vendor: &Vendor) -> String {
    let mut line = format!("{:>4}  {}", vendor.id, vendor.shop_name);
    if !vendor.city.is_empty() {
        line.push_str(&format!("  ({})", vendor.city));
    }
    if let Some(rating) = vendor.rating {
        line.push_str(&format!("  {}", stars(rating)));
    }
    line
}

/// Full shop card, with image links resolved against `asset_base`.
pub fn vendor_details(vendor: &Vendor, asset_base: &str, bookmark: ToggleState) -> String {
    let mut out = vec![format!("{} [{}]", vendor.shop_name, vendor.id)];
    if bookmark.is_active() {
        out[0].push_str("  (bookmarked)");
    }
    out.push(format!(
        "Category: {} / {}",
        vendor.category_name(),
        vendor.subcategory_name()
    ));
    let location: Vec<&str> = [
        vendor.address.as_str(),
        vendor.city.as_str(),
        vendor.state.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.trim().is_empty())
    .collect();
    if !location.is_empty() {
        out.push(format!("Address: {}", location.join(", ")));
    }
    if let Some(number) = vendor.dial_number() {
        out.push(format!("Phone: {number}"));
    }
    if let Some(rating) = vendor.rating {
        out.push(format!("Rating: {} ({rating:.1})", stars(rating)));
    }
    if let Some(facilities) = vendor.facilities.as_deref().filter(|f| !f.trim().is_empty()) {
        out.push(format!("Facilities: {facilities}"));
    }
    if let Some(description) = vendor
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        out.push(String::new());
        out.push(indent(&wrap_text(description, WRAP_WIDTH)));
    }
    let images: Vec<String> = vendor
        .images
        .iter()
        .filter_map(|f| AssetKind::Vendors.resolve(asset_base, f))
        .collect();
    if !images.is_empty() {
        out.push(String::new());
        out.push("Images:".to_string());
        out.extend(images.into_iter().map(|url| format!("  {url}")));
    }
    out.join("\n")
}

pub fn review_block(review: &Review) -> String {
    let mut head = format!("{}  {}", stars(review.rating), review.author_name());
    if let Some(date) = review.created_at.as_deref() {
        head.push_str(&format!("  {}", short_date(date)));
    }
    if review.review.trim().is_empty() {
        head
    } else {
        format!("{head}\n{}", indent(&wrap_text(&review.review, WRAP_WIDTH)))
    }
}

pub fn notification_block(notification: &Notification) -> String {
    let mut head = notification.title.clone();
    if let Some(date) = notification.created_at.as_deref() {
        head.push_str(&format!("  ({})", short_date(date)));
    }
    format!(
        "{head}\n{}",
        indent(&wrap_text(&notification.message, WRAP_WIDTH))
    )
}

pub fn profile_block(user: &User) -> String {
    [
        format!("Name: {}", user.name),
        format!("Email: {}", user.email),
        format!("Mobile: {}", user.mobile),
        format!("Location: {}, {}", user.city, user.state),
    ]
    .join("\n")
}

/// Page prose, wrapped for the terminal.
pub fn page_text(content: &str) -> String {
    content
        .split("\n\n")
        .map(|para| wrap_text(para.trim(), WRAP_WIDTH))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
