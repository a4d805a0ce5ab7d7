// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents an order identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates a new `OrderId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an order line item identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LineItemId(i64);

impl LineItemId {
    /// Creates a new `LineItemId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a customer identifier.
///
/// The customer identifier is the grouping key for the delivery-note
/// flow: one delivery note covers orders of exactly one customer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a new `CustomerId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a material type identifier (paper stock, vinyl, ...).
///
/// The material type is the grouping key for the proofing flow: one
/// imposition run is laid out on a single material.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MaterialTypeId(i64);

impl MaterialTypeId {
    /// Creates a new `MaterialTypeId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MaterialTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the lifecycle state of a production order.
///
/// The lifecycle governs which flows an order may enter: only
/// `Completed` orders (produced but not yet handed over) are eligible
/// for a delivery note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Received, not yet scheduled.
    #[default]
    Pending,
    /// Design work in progress.
    InDesign,
    /// Awaiting customer proof approval.
    Proofing,
    /// On the production floor.
    InProduction,
    /// Production finished, awaiting delivery.
    Completed,
    /// Handed over to the customer.
    Delivered,
    /// Cancelled before completion.
    Cancelled,
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "InDesign" => Ok(Self::InDesign),
            "Proofing" => Ok(Self::Proofing),
            "InProduction" => Ok(Self::InProduction),
            "Completed" => Ok(Self::Completed),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InDesign => "InDesign",
            Self::Proofing => "Proofing",
            Self::InProduction => "InProduction",
            Self::Completed => "Completed",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns whether an order in this status may be batched into a
    /// delivery note.
    ///
    /// Only `Completed` qualifies: production is finished and the goods
    /// have not yet been handed over.
    #[must_use]
    pub const fn is_deliverable(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns whether this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Represents a production order.
///
/// Orders are fetched from the record source; this crate never mutates
/// them. Amounts are integer VND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The canonical order identifier.
    pub order_id: OrderId,
    /// Human-readable order code (e.g. "DH-2026-0042").
    pub code: String,
    /// The customer this order belongs to.
    pub customer_id: CustomerId,
    /// The lifecycle status.
    pub status: OrderStatus,
    /// Total order amount in VND.
    pub total_amount: i64,
    /// Amount already paid in VND.
    pub paid_amount: i64,
    /// The date the order was placed.
    pub ordered_on: NaiveDate,
    /// The agreed delivery date, if any.
    pub delivery_due: Option<NaiveDate>,
}

impl Order {
    /// Creates a new `Order`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        order_id: OrderId,
        code: String,
        customer_id: CustomerId,
        status: OrderStatus,
        total_amount: i64,
        paid_amount: i64,
        ordered_on: NaiveDate,
        delivery_due: Option<NaiveDate>,
    ) -> Self {
        Self {
            order_id,
            code,
            customer_id,
            status,
            total_amount,
            paid_amount,
            ordered_on,
            delivery_due,
        }
    }

    /// Returns whether this order may be batched into a delivery note.
    #[must_use]
    pub const fn is_deliverable(&self) -> bool {
        self.status.is_deliverable()
    }

    /// Returns the unpaid remainder in VND, never negative.
    ///
    /// Overpayment (deposit larger than the invoiced total) counts as
    /// zero debt rather than a credit.
    #[must_use]
    pub const fn outstanding_debt(&self) -> i64 {
        let debt: i64 = self.total_amount - self.paid_amount;
        if debt > 0 { debt } else { 0 }
    }
}

/// Represents one line item of an order, as seen by the proofing flow.
///
/// `quantity_allocated` counts units already placed on earlier proofing
/// orders; the difference to `quantity_ordered` is what remains
/// available for allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// The canonical line item identifier.
    pub line_item_id: LineItemId,
    /// The order this line item belongs to.
    pub order_id: OrderId,
    /// The material this item is printed on.
    pub material_type_id: MaterialTypeId,
    /// Free-form description (e.g. "Business cards 300gsm matte").
    pub description: String,
    /// Units ordered.
    pub quantity_ordered: u32,
    /// Units already allocated to proofing orders.
    pub quantity_allocated: u32,
}

impl OrderLineItem {
    /// Creates a new `OrderLineItem`.
    #[must_use]
    pub const fn new(
        line_item_id: LineItemId,
        order_id: OrderId,
        material_type_id: MaterialTypeId,
        description: String,
        quantity_ordered: u32,
        quantity_allocated: u32,
    ) -> Self {
        Self {
            line_item_id,
            order_id,
            material_type_id,
            description,
            quantity_ordered,
            quantity_allocated,
        }
    }

    /// Returns the units still available for allocation.
    #[must_use]
    pub const fn available_quantity(&self) -> u32 {
        self.quantity_ordered.saturating_sub(self.quantity_allocated)
    }

    /// Returns whether any units remain available.
    #[must_use]
    pub const fn has_available(&self) -> bool {
        self.available_quantity() > 0
    }
}

/// Represents a customer.
///
/// Carried for display and for debt aggregation; the selection logic
/// itself only needs `CustomerId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The canonical customer identifier.
    pub customer_id: CustomerId,
    /// The customer's display name.
    pub name: String,
}

impl Customer {
    /// Creates a new `Customer`.
    #[must_use]
    pub const fn new(customer_id: CustomerId, name: String) -> Self {
        Self { customer_id, name }
    }
}
