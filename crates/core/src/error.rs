// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use printflow_domain::{
    CustomerId, DomainError, LineItemId, MaterialTypeId, OrderId, OrderStatus,
};

/// A business-rule rejection of a selection action.
///
/// Rejections are always recoverable: the state is unchanged and the
/// user may retry immediately. The `Display` text is the user-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRejection {
    /// The order is not in a deliverable status.
    OrderNotDeliverable {
        /// The rejected order.
        order_id: OrderId,
        /// The order's current status.
        status: OrderStatus,
    },
    /// The order belongs to a different customer than the locked one.
    DifferentCustomer {
        /// The customer the selection is locked to.
        locked: CustomerId,
        /// The customer of the rejected order.
        attempted: CustomerId,
    },
    /// The line item has no units left to allocate.
    LineItemExhausted {
        /// The rejected line item.
        line_item_id: LineItemId,
    },
    /// The line item is printed on a different material than the
    /// locked one.
    DifferentMaterial {
        /// The material the selection is locked to.
        locked: MaterialTypeId,
        /// The material of the rejected line item.
        attempted: MaterialTypeId,
    },
}

impl std::fmt::Display for SelectionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderNotDeliverable { order_id, status } => {
                write!(
                    f,
                    "Cannot select order {order_id}: status is {status}, only completed orders can be delivered"
                )
            }
            Self::DifferentCustomer { locked, attempted } => {
                write!(
                    f,
                    "Cannot select: order belongs to customer {attempted}, but the current batch is for customer {locked}"
                )
            }
            Self::LineItemExhausted { line_item_id } => {
                write!(
                    f,
                    "Cannot select line item {line_item_id}: no quantity left to allocate"
                )
            }
            Self::DifferentMaterial { locked, attempted } => {
                write!(
                    f,
                    "Cannot select: line item uses material {attempted}, but the current run is for material {locked}"
                )
            }
        }
    }
}

impl std::error::Error for SelectionRejection {}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A business rule rejected the action; state is unchanged.
    Rejected(SelectionRejection),
    /// An order id was used that the current catalog does not contain.
    /// This is a caller bug, not a user mistake.
    UnknownOrder(OrderId),
    /// A line item id was used that the current catalog does not
    /// contain. This is a caller bug, not a user mistake.
    UnknownLineItem(LineItemId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Rejected(rejection) => write!(f, "{rejection}"),
            Self::UnknownOrder(order_id) => {
                write!(f, "Order {order_id} is not in the current record list")
            }
            Self::UnknownLineItem(line_item_id) => {
                write!(f, "Line item {line_item_id} is not in the current record list")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<SelectionRejection> for CoreError {
    fn from(rejection: SelectionRejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Specific reasons a submit-time validation can fail.
///
/// Submit failures never clear the selection; the user reviews and
/// adjusts instead of losing their work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Nothing is selected.
    EmptySelection,
    /// The selection spans more than one customer. Indicates stale
    /// state; the group gate prevents this during selection.
    MixedCustomers {
        /// The customer the selection is locked to.
        expected: CustomerId,
        /// A differing customer found at submit time.
        found: CustomerId,
    },
    /// A selected order is no longer deliverable.
    IneligibleOrder {
        /// The offending order.
        order_id: OrderId,
        /// The order's status at submit time.
        status: OrderStatus,
    },
    /// A selected order disappeared from the record list between
    /// fetch and submit.
    OrderMissing(OrderId),
    /// Every allocation quantity is zero.
    NoPositiveQuantity,
    /// An allocation exceeds what the line item has left.
    QuantityExceeded {
        /// The offending line item.
        line_item_id: LineItemId,
        /// The quantity the user asked for.
        requested: u32,
        /// The quantity actually available at submit time.
        available: u32,
    },
    /// The total sheet count field is missing or out of range.
    InvalidSheetCount(DomainError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "Nothing is selected"),
            Self::MixedCustomers { expected, found } => {
                write!(
                    f,
                    "Selection mixes customers: locked to {expected} but found an order of {found}"
                )
            }
            Self::IneligibleOrder { order_id, status } => {
                write!(
                    f,
                    "Order {order_id} is no longer deliverable (status is now {status})"
                )
            }
            Self::OrderMissing(order_id) => {
                write!(f, "Order {order_id} is no longer in the record list")
            }
            Self::NoPositiveQuantity => {
                write!(f, "Every quantity is zero; nothing to allocate")
            }
            Self::QuantityExceeded {
                line_item_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Line item {line_item_id}: requested {requested} but only {available} available"
                )
            }
            Self::InvalidSheetCount(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}
