// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use printflow::SubmitError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the
/// boundary contract. A `Transport` error comes from the collaborator
/// behind a source or sink; the flow keeps its state when it sees one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A submit-time precondition failed; the specific reason is
    /// preserved so the user sees why, not just that it failed.
    #[error("cannot submit: {0}")]
    SubmitPrecondition(#[from] SubmitError),
    /// Invalid input was provided to a boundary call.
    #[error("invalid input for {field}: {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: &'static str,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found by the collaborator.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked for.
        what: String,
    },
    /// The collaborator's network call failed.
    #[error("transport failure: {message}")]
    Transport {
        /// The collaborator's error description.
        message: String,
    },
}
