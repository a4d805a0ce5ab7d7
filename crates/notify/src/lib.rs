// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Non-fatal, user-facing notices.
//!
//! Business-rule rejections and submit outcomes are never process
//! errors; they are messages for the person at the screen. This crate
//! holds the message types and a small queue the rendering layer
//! drains. It performs no I/O.

#[cfg(test)]
mod tests;

/// How prominently a notice should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational: an action was accepted.
    Info,
    /// Warning: an action was rejected and nothing changed.
    Warning,
}

/// A single message destined for the user.
///
/// Notices are plain data; whether they become a toast, a banner, or a
/// log line is the presentation layer's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How prominently to surface this notice.
    pub severity: Severity,
    /// The human-readable message.
    pub message: String,
}

impl Notice {
    /// Creates a new `Notice`.
    ///
    /// # Arguments
    ///
    /// * `severity` - How prominently to surface this notice
    /// * `message` - The human-readable message
    #[must_use]
    pub const fn new(severity: Severity, message: String) -> Self {
        Self { severity, message }
    }

    /// Creates an informational notice.
    #[must_use]
    pub const fn info(message: String) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notice.
    #[must_use]
    pub const fn warning(message: String) -> Self {
        Self::new(Severity::Warning, message)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "info: {}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// An append-only queue of pending notices.
///
/// The controller layer pushes; the rendering layer drains. Order is
/// preserved so messages appear in the order the actions happened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    /// Creates a new empty `NoticeLog`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    /// Appends a notice.
    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Removes and returns all pending notices, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns the pending notices without consuming them.
    #[must_use]
    pub fn pending(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns the number of pending notices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.notices.len()
    }

    /// Returns whether no notices are pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
