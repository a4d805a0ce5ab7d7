// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Order status string is not recognized.
    InvalidOrderStatus(String),
    /// Order code is empty or invalid.
    InvalidOrderCode(String),
    /// Sheet count is outside the accepted range.
    InvalidSheetCount {
        /// The rejected raw input.
        raw: String,
        /// A human-readable description of the constraint.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrderStatus(s) => write!(f, "Unknown order status: {s}"),
            Self::InvalidOrderCode(msg) => write!(f, "Invalid order code: {msg}"),
            Self::InvalidSheetCount { raw, reason } => {
                write!(f, "Invalid sheet count '{raw}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
