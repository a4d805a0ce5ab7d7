// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{LineItemCatalog, OrderCatalog};
use crate::error::SubmitError;
use crate::state::{DeliverySelection, ProofingAllocation};
use printflow_domain::{
    CustomerId, LineItemId, MaterialTypeId, OrderId, validate_sheet_count,
};

/// The normalized payload of a delivery-note submission.
///
/// Built only after every precondition holds; the boundary layer turns
/// it into the wire request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryNoteDraft {
    /// The customer all batched orders belong to.
    pub customer_id: CustomerId,
    /// The batched orders, in selection order.
    pub order_ids: Vec<OrderId>,
    /// Sum of `total_amount` over the batched orders, in VND.
    pub total_amount: i64,
}

/// Validates the delivery selection at submit time and builds the
/// normalized payload.
///
/// Re-checks every precondition against the current catalog so a
/// background refetch between selection and submit is caught with a
/// specific reason rather than a generic error. The caller's state is
/// untouched either way; only a confirmed downstream success should
/// reset it.
///
/// # Errors
///
/// * `SubmitError::EmptySelection` when nothing is selected
/// * `SubmitError::OrderMissing` when a selected order left the list
/// * `SubmitError::IneligibleOrder` when a selected order is no longer
///   deliverable
/// * `SubmitError::MixedCustomers` when the selection spans customers
pub fn validate_delivery_submit(
    catalog: &OrderCatalog,
    state: &DeliverySelection,
) -> Result<DeliveryNoteDraft, SubmitError> {
    let Some(customer_id) = state.locked_customer else {
        return Err(SubmitError::EmptySelection);
    };
    if state.is_empty() {
        return Err(SubmitError::EmptySelection);
    }

    let mut total_amount: i64 = 0;
    for order_id in &state.selected {
        let Some(order) = catalog.lookup(*order_id) else {
            return Err(SubmitError::OrderMissing(*order_id));
        };
        if !order.is_deliverable() {
            return Err(SubmitError::IneligibleOrder {
                order_id: *order_id,
                status: order.status,
            });
        }
        if order.customer_id != customer_id {
            return Err(SubmitError::MixedCustomers {
                expected: customer_id,
                found: order.customer_id,
            });
        }
        total_amount += order.total_amount;
    }

    Ok(DeliveryNoteDraft {
        customer_id,
        order_ids: state.selected.clone(),
        total_amount,
    })
}

/// One allocation line of a proofing-order payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofingDraftLine {
    /// The allocated line item.
    pub line_item_id: LineItemId,
    /// Units taken from it, always positive.
    pub quantity: u32,
}

/// The normalized payload of a proofing-order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofingOrderDraft {
    /// The material the run is laid out on.
    pub material_type_id: MaterialTypeId,
    /// The positive allocations, ordered by line item id.
    pub lines: Vec<ProofingDraftLine>,
    /// Total sheets for the run, validated into `1..=i32::MAX`.
    pub sheet_count: i64,
}

/// Validates the proofing allocation at submit time and builds the
/// normalized payload.
///
/// Quantity entries whose line item left the list are orphans and are
/// dropped from the payload; entries for a different material than the
/// locked one are likewise excluded, since one run covers one
/// material. Quantities are re-checked against availability to guard
/// against stale data between load and submit.
///
/// # Arguments
///
/// * `catalog` - The current fetched line item list
/// * `state` - The allocation to validate
/// * `raw_sheet_count` - The raw total-sheet-count form input
///
/// # Errors
///
/// * `SubmitError::EmptySelection` when no group is locked
/// * `SubmitError::NoPositiveQuantity` when every usable quantity is
///   zero
/// * `SubmitError::QuantityExceeded` when an allocation outgrew what
///   is available
/// * `SubmitError::InvalidSheetCount` when the auxiliary field is
///   missing or out of range
pub fn validate_proofing_submit(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    raw_sheet_count: &str,
) -> Result<ProofingOrderDraft, SubmitError> {
    let Some(material_type_id) = state.locked_material else {
        return Err(SubmitError::EmptySelection);
    };

    if !state.quantities.values().any(|quantity| *quantity > 0) {
        return Err(SubmitError::NoPositiveQuantity);
    }

    let mut lines: Vec<ProofingDraftLine> = Vec::new();
    for (line_item_id, quantity) in &state.quantities {
        if *quantity == 0 {
            continue;
        }
        let Some(item) = catalog.lookup(*line_item_id) else {
            // Orphaned entry: the item left the list since the fetch
            continue;
        };
        if item.material_type_id != material_type_id {
            continue;
        }
        if *quantity > item.available_quantity() {
            return Err(SubmitError::QuantityExceeded {
                line_item_id: *line_item_id,
                requested: *quantity,
                available: item.available_quantity(),
            });
        }
        lines.push(ProofingDraftLine {
            line_item_id: *line_item_id,
            quantity: *quantity,
        });
    }

    if lines.is_empty() {
        return Err(SubmitError::NoPositiveQuantity);
    }

    let sheet_count: i64 =
        validate_sheet_count(raw_sheet_count).map_err(SubmitError::InvalidSheetCount)?;

    Ok(ProofingOrderDraft {
        material_type_id,
        lines,
        sheet_count,
    })
}
