// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Signed-in session state and its transition function.
//!
//! [`AppState`] is a plain value. [`reduce`] is pure: it never mutates its
//! input and returns the next state. Ownership and change notification live
//! with whoever holds the state (the client crate's session store).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::User;

/// Which kind of account is signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Vendor,
    Sales,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Vendor => "vendor",
            Role::Sales => "sales",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "vendor" => Ok(Role::Vendor),
            "sales" => Ok(Role::Sales),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub user: Option<User>,
    pub role: Role,
    /// Set when the app has been opened before and onboarding was shown.
    pub is_first_login: bool,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// A session transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Sign in, or refresh the signed-in user's record.
    SetUser(User),
    SetRole(Role),
    Logout,
    /// Clears the user and marks onboarding as seen.
    FirstLogin,
}

/// Computes the state that follows `action`.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::SetUser(user) => AppState {
            user: Some(user),
            ..state.clone()
        },
        Action::SetRole(role) => AppState {
            role,
            ..state.clone()
        },
        Action::Logout => AppState {
            user: None,
            ..state.clone()
        },
        Action::FirstLogin => AppState {
            user: None,
            is_first_login: true,
            ..state.clone()
        },
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
