// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use printflow_domain::{CustomerId, LineItemId, MaterialTypeId, OrderId};
use printflow_notify::Notice;
use std::collections::BTreeMap;

/// The two phases of a selection.
///
/// `Empty → GroupLocked` on the first successful add;
/// `GroupLocked → Empty` on removal of the last member, explicit
/// clear, or confirmed submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected; any eligible record may start a group.
    Empty,
    /// At least one record selected; the group key is locked.
    GroupLocked,
}

/// Selection state of the delivery-note flow.
///
/// Holds ids only, in insertion order. The backing records live in the
/// catalog; ids that lost their catalog entry are orphans and are
/// skipped by aggregates and payload construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliverySelection {
    /// The selected order ids, unique, in insertion order. Membership
    /// is what the rules care about; a removed id that is re-toggled
    /// re-enters at the tail.
    pub selected: Vec<OrderId>,
    /// The customer the selection is locked to. `None` exactly when
    /// the selection is empty.
    pub locked_customer: Option<CustomerId>,
}

impl DeliverySelection {
    /// Creates a new empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
            locked_customer: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> SelectionPhase {
        if self.selected.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::GroupLocked
        }
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns whether the given order is selected.
    #[must_use]
    pub fn is_selected(&self, order_id: OrderId) -> bool {
        self.selected.contains(&order_id)
    }

    /// Returns the number of selected orders, orphans included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.selected.len()
    }
}

/// Selection and allocation state of the proofing flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofingAllocation {
    /// The selected line item ids, unique, in insertion order.
    /// Membership is what the rules care about; a removed id that is
    /// re-toggled re-enters at the tail.
    pub selected: Vec<LineItemId>,
    /// The material the selection is locked to. `None` exactly when
    /// the selection is empty.
    pub locked_material: Option<MaterialTypeId>,
    /// Quantity to take per line item. May hold entries for
    /// unselected items (pre-seeded edits); only positive entries
    /// count toward aggregates and payloads.
    pub quantities: BTreeMap<LineItemId, u32>,
}

impl ProofingAllocation {
    /// Creates a new empty allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
            locked_material: None,
            quantities: BTreeMap::new(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> SelectionPhase {
        if self.selected.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::GroupLocked
        }
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns whether the given line item is selected.
    #[must_use]
    pub fn is_selected(&self, line_item_id: LineItemId) -> bool {
        self.selected.contains(&line_item_id)
    }

    /// Returns the quantity to take for a line item, zero if unset.
    #[must_use]
    pub fn quantity_of(&self, line_item_id: LineItemId) -> u32 {
        self.quantities.get(&line_item_id).copied().unwrap_or(0)
    }
}

/// The result of a successful delivery-selection transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTransition {
    /// The new state after the transition.
    pub new_state: DeliverySelection,
    /// A user-facing notice describing the accepted action, if the
    /// action warrants one.
    pub notice: Option<Notice>,
}

/// The result of a successful proofing-allocation transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofingTransition {
    /// The new state after the transition.
    pub new_state: ProofingAllocation,
    /// A user-facing notice describing the accepted action, if the
    /// action warrants one.
    pub notice: Option<Notice>,
}
