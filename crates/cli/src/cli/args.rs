// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common flags.

use clap::Args;

/// Location filter. Either flag falls back to the signed-in user's profile.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationArgs {
    /// City to search in
    #[arg(long)]
    pub city: Option<String>,

    /// State to search in
    #[arg(long)]
    pub state: Option<String>,
}

/// Category filter for shop listings.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryArgs {
    /// Only shops in this category
    #[arg(long, short = 'c')]
    pub category: Option<i64>,

    /// Narrow to a subcategory (requires --category)
    #[arg(long, short = 's', requires = "category")]
    pub subcategory: Option<i64>,
}
