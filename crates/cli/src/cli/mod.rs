// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::{CategoryArgs, LocationArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse local shops, bookmark and rate them")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Log requests to stderr (same as STOREFRONT_LOG=debug)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// List shop categories
    Categories,

    /// List subcategories of a category
    Subcategories {
        /// Category id
        category: i64,
    },

    /// List states with listed shops
    States,

    /// List cities in a state
    Cities {
        /// State name
        #[arg(value_parser = non_empty_string)]
        state: String,
    },

    /// Show announcements
    Notifications,

    /// Show the About page
    About,

    // ─────────────────────────────────────────────────────────────────────────
    // Shops
    // ─────────────────────────────────────────────────────────────────────────
    /// List shops near you, optionally within a category
    #[command(after_help = "\
Examples:
  storefront shops                           Shops in your profile's city
  storefront shops --city Pune --state MH    Shops in another city
  storefront shops -c 2 -s 5                 Only category 2, subcategory 5")]
    Shops {
        #[command(flatten)]
        location: LocationArgs,

        #[command(flatten)]
        category: CategoryArgs,
    },

    /// Show one shop
    Shop {
        /// Shop id
        id: i64,
    },

    /// List reviews of a shop
    Reviews {
        /// Shop id
        vendor: i64,
    },

    /// Rate a shop from 1 to 5 stars
    Rate {
        /// Shop id
        vendor: i64,

        /// Stars, 1 to 5
        stars: u8,

        /// Review text
        #[arg(long, short = 'r')]
        review: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Bookmarks
    // ─────────────────────────────────────────────────────────────────────────
    /// List bookmarked shops
    Bookmarks,

    /// Bookmark a shop, or remove the bookmark if it is already set
    Bookmark {
        /// Shop id
        #[arg(value_parser = non_empty_string)]
        vendor: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────────────────────
    /// Sign in with mobile number and password
    Login {
        #[arg(long, short = 'm')]
        mobile: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show your profile, refreshed from the server
    Profile,

    /// Send feedback to the storefront team
    Feedback {
        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Defaults to your profile name
        #[arg(long)]
        name: Option<String>,

        /// Defaults to your profile email
        #[arg(long)]
        email: Option<String>,
    },

    /// Inspect or initialize configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration and where it was loaded from
    Show,
    /// Print the path of the config file
    Path,
    /// Write the effective configuration to the config file
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
