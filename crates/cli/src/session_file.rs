// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence of the signed-in session between invocations.
//!
//! The session is stored as JSON in `<state_dir>/session.json`, where the
//! state directory is `$STOREFRONT_STATE_DIR`, else
//! `$XDG_STATE_HOME/storefront`, else the platform's local data directory.

use std::fs;
use std::path::{Path, PathBuf};

use sf_core::AppState;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "storefront";
const SESSION_FILE_NAME: &str = "session.json";

/// Directory holding state that survives between runs.
pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = env::state_dir() {
        return Ok(dir);
    }
    if let Some(xdg) = env::xdg_state_home() {
        return Ok(xdg.join(APP_DIR_NAME));
    }
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or(Error::NoStateDir)
}

/// The on-disk session record.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionFile { path: path.into() }
    }

    /// Session file inside the default state directory.
    pub fn open_default() -> Result<Self> {
        Ok(SessionFile::new(state_dir()?.join(SESSION_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session. A missing or unreadable record means
    /// nobody is signed in.
    pub fn load(&self) -> Result<AppState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppState::default()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt session file");
                Ok(AppState::default())
            }
        }
    }

    /// Writes `state`, creating the state directory if needed.
    pub fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_file_tests.rs"]
mod tests;
