// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-visible notices.
//!
//! Failures never propagate past the call site that can explain them to the
//! user. They are turned into a [`Notice`] and handed to a [`NoticeSink`],
//! which a UI renders as a toast and the CLI prints to stderr.

use std::sync::{Mutex, PoisonError};

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(title: impl Into<String>, err: &ClientError) -> Self {
        Notice::error(title, err.user_message())
    }
}

/// Receives notices. Implementations must tolerate calls from any task.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Records notices in memory, in the order they were raised.
#[derive(Debug, Default)]
pub struct NoticeLog {
    entries: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notice> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.entries()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl NoticeSink for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

/// Unwraps `result`, or reports the error and falls back to `T::default()`.
///
/// Used by screens that should render empty rather than fail.
pub fn degrade<T: Default>(result: ClientResult<T>, title: &str, sink: &dyn NoticeSink) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "{title}");
            sink.notify(Notice::from_error(title, &err));
            T::default()
        }
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
