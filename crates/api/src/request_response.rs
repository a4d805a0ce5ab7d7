// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use printflow::{DeliveryNoteDraft, ProofingOrderDraft};

/// API request to create a delivery note from a batch of orders.
///
/// This DTO is distinct from core types and represents the API
/// contract: raw integers, no newtypes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateDeliveryNoteRequest {
    /// The customer all batched orders belong to.
    pub customer_id: i64,
    /// The batched order ids, in selection order.
    pub order_ids: Vec<i64>,
    /// Sum of the batched order amounts, in VND.
    pub total_amount: i64,
}

impl CreateDeliveryNoteRequest {
    /// Builds the wire request from a validated draft.
    #[must_use]
    pub fn from_draft(draft: &DeliveryNoteDraft) -> Self {
        Self {
            customer_id: draft.customer_id.value(),
            order_ids: draft.order_ids.iter().map(|id| id.value()).collect(),
            total_amount: draft.total_amount,
        }
    }
}

/// API response for a successful delivery note creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateDeliveryNoteResponse {
    /// The canonical identifier of the created delivery note.
    pub delivery_note_id: i64,
    /// Number of orders on the note.
    pub order_count: usize,
    /// A success message.
    pub message: String,
}

/// One allocation line of a proofing-order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProofingItemDto {
    /// The allocated line item.
    pub line_item_id: i64,
    /// Units taken from it, always positive.
    pub quantity: u32,
}

/// API request to create a proofing (imposition) order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateProofingOrderRequest {
    /// The material the run is laid out on.
    pub material_type_id: i64,
    /// The positive allocations.
    pub items: Vec<ProofingItemDto>,
    /// Total sheets for the run.
    pub sheet_count: i64,
}

impl CreateProofingOrderRequest {
    /// Builds the wire request from a validated draft.
    #[must_use]
    pub fn from_draft(draft: &ProofingOrderDraft) -> Self {
        Self {
            material_type_id: draft.material_type_id.value(),
            items: draft
                .lines
                .iter()
                .map(|line| ProofingItemDto {
                    line_item_id: line.line_item_id.value(),
                    quantity: line.quantity,
                })
                .collect(),
            sheet_count: draft.sheet_count,
        }
    }
}

/// API response for a successful proofing order creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateProofingOrderResponse {
    /// The canonical identifier of the created proofing order.
    pub proofing_order_id: i64,
    /// A success message.
    pub message: String,
}
