// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Domain records returned by the storefront service.
//!
//! Every record decodes with `#[serde(default)]`, and non-optional fields
//! map `null` to their default, so that a missing or null field produces a
//! default value rather than dropping the whole record.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers absent fields; the service also sends
/// `null` for unset columns.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A top-level shop category (Grocery, Pharmacy, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subcategory {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

/// Compact `{ id, name }` reference embedded in vendor records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// A shop listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub shop_name: String,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    pub contact_number: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub facilities: Option<String>,
    /// Image file names, resolved against the `vendors` asset directory.
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<String>,
    pub rating: Option<f64>,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub category: Option<NamedRef>,
    pub subcategory: Option<NamedRef>,
    pub verified: Option<bool>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

impl Vendor {
    /// Phone number to dial, preferring the explicit `phone` field.
    pub fn dial_number(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .or(self.contact_number.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("N/A", |c| c.name.as_str())
    }

    pub fn subcategory_name(&self) -> &str {
        self.subcategory.as_ref().map_or("N/A", |c| c.name.as_str())
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewAuthor {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub vendor_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_default")]
    pub review: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(rename = "User")]
    pub author: Option<ReviewAuthor>,
}

impl Review {
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("Anonymous", |a| a.name.as_str())
    }
}

/// A user → vendor bookmark relation, with the vendor joined in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bookmark {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub vendor_id: i64,
    #[serde(rename = "Vendor")]
    pub vendor: Option<Vendor>,
}

/// Home-screen promotional banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slider {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    pub title: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub image_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(alias = "body")]
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    pub image: Option<String>,
    pub created_at: Option<String>,
}

/// An end-user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub mobile: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
}

/// A static content page (About, Terms, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
