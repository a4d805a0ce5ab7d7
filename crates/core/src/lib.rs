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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod apply;
mod catalog;
mod command;
mod error;
mod state;
mod submit;

#[cfg(test)]
mod tests;

use printflow_domain::{LineItemId, OrderId};

// Re-export public types and functions
pub use aggregate::{DeliverySummary, ProofingSummary, delivery_summary, proofing_summary};
pub use apply::{apply_delivery, apply_proofing};
pub use catalog::{LineItemCatalog, OrderCatalog};
pub use command::{DeliveryCommand, ProofingCommand};
pub use error::{CoreError, SelectionRejection, SubmitError};
pub use state::{
    DeliverySelection, DeliveryTransition, ProofingAllocation, ProofingTransition, SelectionPhase,
};
pub use submit::{
    DeliveryNoteDraft, ProofingDraftLine, ProofingOrderDraft, validate_delivery_submit,
    validate_proofing_submit,
};

/// Validates that an order exists in the current catalog.
///
/// This is a read-only validation used before acting on an order id
/// received from the rendering layer.
///
/// # Errors
///
/// Returns `CoreError::UnknownOrder` if the catalog has no such order.
pub fn validate_order_known(catalog: &OrderCatalog, order_id: OrderId) -> Result<(), CoreError> {
    if catalog.lookup(order_id).is_none() {
        return Err(CoreError::UnknownOrder(order_id));
    }
    Ok(())
}

/// Validates that a line item exists in the current catalog.
///
/// # Errors
///
/// Returns `CoreError::UnknownLineItem` if the catalog has no such
/// line item.
pub fn validate_line_item_known(
    catalog: &LineItemCatalog,
    line_item_id: LineItemId,
) -> Result<(), CoreError> {
    if catalog.lookup(line_item_id).is_none() {
        return Err(CoreError::UnknownLineItem(line_item_id));
    }
    Ok(())
}
