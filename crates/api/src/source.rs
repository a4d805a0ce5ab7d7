// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts.
//!
//! The flows never talk to the network themselves; they pull records
//! through a source and push submissions through a sink. Retry,
//! backoff, and timeout policy belong to whoever implements these
//! traits.

use crate::error::ApiError;
use crate::paging::{ListQuery, Page};
use crate::request_response::{
    CreateDeliveryNoteRequest, CreateDeliveryNoteResponse, CreateProofingOrderRequest,
    CreateProofingOrderResponse,
};
use printflow_domain::{Order, OrderLineItem};

/// A paginated source of orders.
pub trait OrderSource {
    /// Fetches one page of orders matching the query's filters.
    fn fetch_orders(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<Page<Order>, ApiError>>;
}

/// A source of order line items available for proofing.
pub trait LineItemSource {
    /// Fetches the line items that still have quantity available.
    fn fetch_available(&self) -> impl Future<Output = Result<Vec<OrderLineItem>, ApiError>>;
}

/// The submission sink of the delivery-note flow.
pub trait DeliveryNoteSink {
    /// Creates a delivery note from a validated request.
    fn create_delivery_note(
        &self,
        request: CreateDeliveryNoteRequest,
    ) -> impl Future<Output = Result<CreateDeliveryNoteResponse, ApiError>>;
}

/// The submission sink of the proofing flow.
pub trait ProofingOrderSink {
    /// Creates a proofing order from a validated request.
    fn create_proofing_order(
        &self,
        request: CreateProofingOrderRequest,
    ) -> impl Future<Output = Result<CreateProofingOrderResponse, ApiError>>;
}
