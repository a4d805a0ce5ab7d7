// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DeliveryCommand, DeliverySelection, DeliveryTransition, LineItemCatalog, OrderCatalog,
    ProofingAllocation, ProofingCommand, ProofingTransition, apply_delivery, apply_proofing,
};
use chrono::NaiveDate;
use printflow_domain::{
    CustomerId, LineItemId, MaterialTypeId, Order, OrderId, OrderLineItem, OrderStatus,
};

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

/// The standard order catalog used across these tests:
/// A(1, customer 1, 100), B(2, customer 1, 200), C(3, customer 2, 50),
/// all deliverable, plus D(4, customer 1) still in production.
pub fn create_order_catalog() -> OrderCatalog {
    OrderCatalog::new(vec![
        deliverable_order(1, 1, 100),
        deliverable_order(2, 1, 200),
        deliverable_order(3, 2, 50),
        create_order(4, 1, OrderStatus::InProduction, 400),
    ])
}

pub fn create_line_item_catalog() -> LineItemCatalog {
    LineItemCatalog::new(vec![
        create_line_item(1, 10, 50, 0),
        create_line_item(2, 10, 200, 120),
        create_line_item(3, 20, 30, 0),
        create_line_item(4, 10, 100, 100),
    ])
}

pub fn toggle_order(
    catalog: &OrderCatalog,
    state: &DeliverySelection,
    id: i64,
) -> Result<DeliveryTransition, crate::CoreError> {
    apply_delivery(
        catalog,
        state,
        DeliveryCommand::Toggle {
            order_id: OrderId::new(id),
        },
    )
}

pub fn toggle_item(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    id: i64,
) -> Result<ProofingTransition, crate::CoreError> {
    apply_proofing(
        catalog,
        state,
        ProofingCommand::Toggle {
            line_item_id: LineItemId::new(id),
        },
    )
}

pub fn set_item_quantity(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    id: i64,
    raw: &str,
) -> Result<ProofingTransition, crate::CoreError> {
    apply_proofing(
        catalog,
        state,
        ProofingCommand::SetQuantity {
            line_item_id: LineItemId::new(id),
            raw: raw.to_string(),
        },
    )
}
