// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::OrderCatalog;
use crate::state::{DeliverySelection, ProofingAllocation};

/// Derived display aggregate of a delivery selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliverySummary {
    /// Number of selected orders, orphans included.
    pub count: usize,
    /// Sum of `total_amount` over the selected orders still present in
    /// the catalog. Orphans contribute zero.
    pub total_amount: i64,
}

/// Derives the delivery-selection aggregate.
///
/// Selected ids missing from the catalog are orphans: they stay in the
/// count but contribute nothing to the total and never raise an error.
#[must_use]
pub fn delivery_summary(catalog: &OrderCatalog, state: &DeliverySelection) -> DeliverySummary {
    let total_amount: i64 = state
        .selected
        .iter()
        .filter_map(|id| catalog.lookup(*id))
        .map(|order| order.total_amount)
        .sum();
    DeliverySummary {
        count: state.len(),
        total_amount,
    }
}

/// Derived display aggregate of a proofing allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProofingSummary {
    /// Sum of all positive quantities.
    pub total_quantity: u64,
    /// Number of line items with a positive quantity.
    pub items_with_quantity: usize,
}

/// Derives the proofing-allocation aggregate over the quantity map.
#[must_use]
pub fn proofing_summary(state: &ProofingAllocation) -> ProofingSummary {
    let mut total_quantity: u64 = 0;
    let mut items_with_quantity: usize = 0;
    for quantity in state.quantities.values() {
        if *quantity > 0 {
            total_quantity += u64::from(*quantity);
            items_with_quantity += 1;
        }
    }
    ProofingSummary {
        total_quantity,
        items_with_quantity,
    }
}
