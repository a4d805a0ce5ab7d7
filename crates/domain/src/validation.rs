// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Parses a raw quantity input from a form field.
///
/// This function is pure, deterministic, and has no side effects.
/// Range clamping against the available quantity is the caller's job;
/// this only decides whether the input is numeric at all.
///
/// # Arguments
///
/// * `raw` - The raw user input
///
/// # Returns
///
/// * `Some(0)` for empty (or whitespace-only) input
/// * `Some(value)` for a parseable integer, sign included
/// * `None` for anything else; the caller must leave its state
///   untouched rather than store a non-numeric value
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}

/// Validates and parses the total sheet count of a proofing order.
///
/// # Arguments
///
/// * `raw` - The raw user input
///
/// # Returns
///
/// * `Ok(count)` if the input is an integer in `1..=i32::MAX`
/// * `Err(DomainError::InvalidSheetCount)` otherwise
///
/// # Errors
///
/// Returns an error if the input is empty, non-numeric, zero,
/// negative, or larger than `i32::MAX`.
pub fn validate_sheet_count(raw: &str) -> Result<i64, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidSheetCount {
            raw: raw.to_string(),
            reason: "sheet count is required",
        });
    }
    let count: i64 = trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidSheetCount {
            raw: raw.to_string(),
            reason: "sheet count must be an integer",
        })?;
    if count < 1 || count > i64::from(i32::MAX) {
        return Err(DomainError::InvalidSheetCount {
            raw: raw.to_string(),
            reason: "sheet count must be between 1 and 2147483647",
        });
    }
    Ok(count)
}

/// Validates that an order code is usable for display and submission.
///
/// # Errors
///
/// Returns an error if the code is empty or whitespace-only.
pub fn validate_order_code(code: &str) -> Result<(), DomainError> {
    if code.trim().is_empty() {
        return Err(DomainError::InvalidOrderCode(String::from(
            "Order code cannot be empty",
        )));
    }
    Ok(())
}
