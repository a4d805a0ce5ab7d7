// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::paging::{ListQuery, Page, paginate};
use crate::request_response::{
    CreateDeliveryNoteRequest, CreateDeliveryNoteResponse, CreateProofingOrderRequest,
    CreateProofingOrderResponse,
};
use crate::source::{DeliveryNoteSink, LineItemSource, OrderSource, ProofingOrderSink};
use chrono::NaiveDate;
use printflow_domain::{
    CustomerId, LineItemId, MaterialTypeId, Order, OrderId, OrderLineItem, OrderStatus,
};
use std::cell::RefCell;

pub fn create_order(id: i64, customer: i64, status: OrderStatus, amount: i64) -> Order {
    Order::new(
        OrderId::new(id),
        format!("DH-2026-{id:04}"),
        CustomerId::new(customer),
        status,
        amount,
        0,
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        None,
    )
}

pub fn deliverable_order(id: i64, customer: i64, amount: i64) -> Order {
    create_order(id, customer, OrderStatus::Completed, amount)
}

pub fn create_line_item(id: i64, material: i64, ordered: u32, allocated: u32) -> OrderLineItem {
    OrderLineItem::new(
        LineItemId::new(id),
        OrderId::new(1),
        MaterialTypeId::new(material),
        format!("Item {id}"),
        ordered,
        allocated,
    )
}

/// An order source backed by a plain vector; filters with the query
/// and slices pages the way a backend would.
pub struct InMemoryOrderSource {
    pub orders: Vec<Order>,
}

impl OrderSource for InMemoryOrderSource {
    async fn fetch_orders(&self, query: &ListQuery) -> Result<Page<Order>, ApiError> {
        let filtered: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| query.matches(order))
            .cloned()
            .collect();
        Ok(paginate(&filtered, query.page, query.page_size))
    }
}

/// An order source whose fetch always fails.
pub struct FailingOrderSource;

impl OrderSource for FailingOrderSource {
    async fn fetch_orders(&self, _query: &ListQuery) -> Result<Page<Order>, ApiError> {
        Err(ApiError::Transport {
            message: "connection refused".to_string(),
        })
    }
}

pub struct InMemoryLineItemSource {
    pub items: Vec<OrderLineItem>,
}

impl LineItemSource for InMemoryLineItemSource {
    async fn fetch_available(&self) -> Result<Vec<OrderLineItem>, ApiError> {
        Ok(self.items.clone())
    }
}

/// A sink that records every request and answers with a canned
/// success.
#[derive(Default)]
pub struct RecordingDeliverySink {
    pub requests: RefCell<Vec<CreateDeliveryNoteRequest>>,
}

impl DeliveryNoteSink for RecordingDeliverySink {
    async fn create_delivery_note(
        &self,
        request: CreateDeliveryNoteRequest,
    ) -> Result<CreateDeliveryNoteResponse, ApiError> {
        let order_count: usize = request.order_ids.len();
        self.requests.borrow_mut().push(request);
        Ok(CreateDeliveryNoteResponse {
            delivery_note_id: 77,
            order_count,
            message: "Delivery note created".to_string(),
        })
    }
}

/// A sink whose submission always fails.
pub struct FailingDeliverySink;

impl DeliveryNoteSink for FailingDeliverySink {
    async fn create_delivery_note(
        &self,
        _request: CreateDeliveryNoteRequest,
    ) -> Result<CreateDeliveryNoteResponse, ApiError> {
        Err(ApiError::Transport {
            message: "gateway timeout".to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingProofingSink {
    pub requests: RefCell<Vec<CreateProofingOrderRequest>>,
}

impl ProofingOrderSink for RecordingProofingSink {
    async fn create_proofing_order(
        &self,
        request: CreateProofingOrderRequest,
    ) -> Result<CreateProofingOrderResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        Ok(CreateProofingOrderResponse {
            proofing_order_id: 88,
            message: "Proofing order created".to_string(),
        })
    }
}

pub struct FailingProofingSink;

impl ProofingOrderSink for FailingProofingSink {
    async fn create_proofing_order(
        &self,
        _request: CreateProofingOrderRequest,
    ) -> Result<CreateProofingOrderResponse, ApiError> {
        Err(ApiError::Transport {
            message: "gateway timeout".to_string(),
        })
    }
}
