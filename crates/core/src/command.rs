// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use printflow_domain::{CustomerId, LineItemId, OrderId};

/// A command represents user intent in the delivery-note flow as data
/// only.
///
/// Commands are the only way to request selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryCommand {
    /// Toggle one order in or out of the selection.
    Toggle {
        /// The order to toggle.
        order_id: OrderId,
    },
    /// Select every deliverable order of one customer, or clear the
    /// selection if they are all already selected.
    SelectAllForCustomer {
        /// The target customer. When `None`, the locked customer is
        /// used, falling back to the customer of the first deliverable
        /// order in the list.
        customer_id: Option<CustomerId>,
    },
    /// Clear the selection entirely.
    Clear,
}

/// A command represents user intent in the proofing flow as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofingCommand {
    /// Toggle one line item in or out of the selection.
    Toggle {
        /// The line item to toggle.
        line_item_id: LineItemId,
    },
    /// Set the quantity to take from one line item.
    SetQuantity {
        /// The line item whose quantity is edited.
        line_item_id: LineItemId,
        /// The raw form-field input; parsed and clamped by the
        /// transition, never stored verbatim.
        raw: String,
    },
    /// Clear the selection and all quantities.
    Clear,
}
