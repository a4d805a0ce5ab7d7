// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard aggregation.
//!
//! The record source is paginated, so the dashboard numbers are built
//! by absorbing one page after another. Cancelled orders count toward
//! the order total but contribute nothing financially.

use printflow_domain::{CustomerId, Order, OrderStatus};
use std::collections::BTreeMap;

/// The KPI numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct KpiTotals {
    /// All orders seen.
    pub orders: usize,
    /// Orders currently on the production floor.
    pub in_production: usize,
    /// Orders produced and awaiting delivery.
    pub completed: usize,
    /// Orders handed over.
    pub delivered: usize,
    /// Sum of order amounts, cancelled orders excluded, in VND.
    pub revenue: i64,
    /// Sum of unpaid remainders, cancelled orders excluded, in VND.
    pub outstanding_debt: i64,
}

/// Accumulates KPI totals across successive order pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KpiAccumulator {
    totals: KpiTotals,
}

impl KpiAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            totals: KpiTotals {
                orders: 0,
                in_production: 0,
                completed: 0,
                delivered: 0,
                revenue: 0,
                outstanding_debt: 0,
            },
        }
    }

    /// Absorbs one fetched page of orders.
    pub fn absorb_page(&mut self, orders: &[Order]) {
        for order in orders {
            self.totals.orders += 1;
            match order.status {
                OrderStatus::InProduction => self.totals.in_production += 1,
                OrderStatus::Completed => self.totals.completed += 1,
                OrderStatus::Delivered => self.totals.delivered += 1,
                OrderStatus::Pending
                | OrderStatus::InDesign
                | OrderStatus::Proofing
                | OrderStatus::Cancelled => {}
            }
            if order.status != OrderStatus::Cancelled {
                self.totals.revenue += order.total_amount;
                self.totals.outstanding_debt += order.outstanding_debt();
            }
        }
    }

    /// Returns the totals accumulated so far.
    #[must_use]
    pub const fn totals(&self) -> KpiTotals {
        self.totals
    }
}

/// Per-customer outstanding debt, folded from order pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DebtLedger {
    by_customer: BTreeMap<CustomerId, i64>,
}

impl DebtLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_customer: BTreeMap::new(),
        }
    }

    /// Absorbs one fetched page of orders.
    ///
    /// Customers whose orders carry no debt still get an entry, so the
    /// debt view can list them with a zero balance.
    pub fn absorb_page(&mut self, orders: &[Order]) {
        for order in orders {
            if order.status == OrderStatus::Cancelled {
                continue;
            }
            let entry: &mut i64 = self.by_customer.entry(order.customer_id).or_insert(0);
            *entry += order.outstanding_debt();
        }
    }

    /// Returns the outstanding debt of one customer.
    #[must_use]
    pub fn debt_of(&self, customer_id: CustomerId) -> i64 {
        self.by_customer.get(&customer_id).copied().unwrap_or(0)
    }

    /// Returns all balances, ordered by customer id.
    pub fn balances(&self) -> impl Iterator<Item = (CustomerId, i64)> + '_ {
        self.by_customer.iter().map(|(id, debt)| (*id, *debt))
    }

    /// Returns the total outstanding debt across all customers.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.by_customer.values().sum()
    }
}
