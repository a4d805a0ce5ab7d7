// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use printflow_domain::{CustomerId, LineItemId, Order, OrderId, OrderLineItem};

/// The current externally fetched list of orders.
///
/// The catalog is the single source of truth for eligibility and
/// amounts. Selections hold ids only; a selected id with no catalog
/// entry is an orphan and contributes nothing to aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderCatalog {
    orders: Vec<Order>,
}

impl OrderCatalog {
    /// Creates a catalog from a fetched order list.
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Creates an empty catalog (nothing fetched yet).
    #[must_use]
    pub const fn empty() -> Self {
        Self { orders: Vec::new() }
    }

    /// Looks up an order by id.
    #[must_use]
    pub fn lookup(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    /// Returns all orders in fetch order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the deliverable orders of one customer, in fetch order.
    pub fn deliverable_for(&self, customer_id: CustomerId) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.customer_id == customer_id && order.is_deliverable())
    }

    /// Returns the first deliverable order in the list, if any.
    ///
    /// Used to infer a target customer when select-all is invoked on
    /// an empty selection without an explicit customer.
    #[must_use]
    pub fn first_deliverable(&self) -> Option<&Order> {
        self.orders.iter().find(|order| order.is_deliverable())
    }
}

/// The current externally fetched list of order line items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineItemCatalog {
    items: Vec<OrderLineItem>,
}

impl LineItemCatalog {
    /// Creates a catalog from a fetched line item list.
    #[must_use]
    pub const fn new(items: Vec<OrderLineItem>) -> Self {
        Self { items }
    }

    /// Creates an empty catalog (nothing fetched yet).
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Looks up a line item by id.
    #[must_use]
    pub fn lookup(&self, line_item_id: LineItemId) -> Option<&OrderLineItem> {
        self.items
            .iter()
            .find(|item| item.line_item_id == line_item_id)
    }

    /// Returns all line items in fetch order.
    #[must_use]
    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    /// Returns the available quantity of a line item, if present.
    #[must_use]
    pub fn available_quantity(&self, line_item_id: LineItemId) -> Option<u32> {
        self.lookup(line_item_id)
            .map(OrderLineItem::available_quantity)
    }
}
