// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static asset addressing.
//!
//! The server returns bare file names (`"shop1.jpg"`); images live under
//! `<asset_base>/<kind>/<file>` on a separate static origin.

use std::fmt;

/// Upload directory an asset file name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Vendors,
    Categories,
    Subcategories,
    Sliders,
    Notifications,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Vendors => "vendors",
            AssetKind::Categories => "categories",
            AssetKind::Subcategories => "subcategories",
            AssetKind::Sliders => "sliders",
            AssetKind::Notifications => "notifications",
        }
    }

    /// Joins `file` onto `base` under this kind's directory.
    ///
    /// Absolute URLs pass through untouched; an empty file name yields `None`.
    pub fn resolve(&self, base: &str, file: &str) -> Option<String> {
        let file = file.trim();
        if file.is_empty() {
            return None;
        }
        if file.starts_with("http://") || file.starts_with("https://") {
            return Some(file.to_string());
        }
        Some(format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.as_str(),
            file.trim_start_matches('/')
        ))
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        vendor = { AssetKind::Vendors, "http://h/uploads", "a.jpg", Some("http://h/uploads/vendors/a.jpg") },
        trailing_slash = { AssetKind::Sliders, "http://h/uploads/", "/s.png", Some("http://h/uploads/sliders/s.png") },
        absolute = { AssetKind::Categories, "http://h/uploads", "https://cdn/x.png", Some("https://cdn/x.png") },
        blank = { AssetKind::Notifications, "http://h/uploads", "  ", None },
    )]
    fn resolve(kind: AssetKind, base: &str, file: &str, expected: Option<&str>) {
        assert_eq!(kind.resolve(base, file).as_deref(), expected);
    }
}
