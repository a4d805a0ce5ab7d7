// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{LineItemCatalog, OrderCatalog};
use crate::command::{DeliveryCommand, ProofingCommand};
use crate::error::{CoreError, SelectionRejection};
use crate::state::{
    DeliverySelection, DeliveryTransition, ProofingAllocation, ProofingTransition,
};
use printflow_domain::{CustomerId, LineItemId, Order, OrderId, OrderLineItem, parse_quantity};
use printflow_notify::Notice;

/// Applies a delivery-note selection command to the current state,
/// producing a new state and an optional user-facing notice.
///
/// The state is never mutated in place: rejected commands return an
/// error and leave the caller's state untouched.
///
/// # Arguments
///
/// * `catalog` - The current fetched order list
/// * `state` - The current selection (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(DeliveryTransition)` containing the new state
/// * `Err(CoreError::Rejected)` for business-rule violations
/// * `Err(CoreError::UnknownOrder)` when a caller passes an id that is
///   neither selected nor in the catalog (a caller bug)
///
/// # Errors
///
/// Returns an error if the command violates the group-homogeneity or
/// eligibility rules, or references an unknown order.
pub fn apply_delivery(
    catalog: &OrderCatalog,
    state: &DeliverySelection,
    command: DeliveryCommand,
) -> Result<DeliveryTransition, CoreError> {
    match command {
        DeliveryCommand::Toggle { order_id } => {
            if state.is_selected(order_id) {
                return Ok(remove_order(state, order_id));
            }
            add_order(catalog, state, order_id)
        }
        DeliveryCommand::SelectAllForCustomer { customer_id } => {
            Ok(select_all_for_customer(catalog, state, customer_id))
        }
        DeliveryCommand::Clear => Ok(DeliveryTransition {
            new_state: DeliverySelection::new(),
            notice: Some(Notice::info(String::from("Selection cleared"))),
        }),
    }
}

/// Removal always succeeds, orphaned ids included: the record backing
/// a selected id may have left the list since the last fetch.
fn remove_order(state: &DeliverySelection, order_id: OrderId) -> DeliveryTransition {
    let mut new_state: DeliverySelection = state.clone();
    new_state.selected.retain(|id| *id != order_id);
    if new_state.selected.is_empty() {
        new_state.locked_customer = None;
    }
    DeliveryTransition {
        new_state,
        notice: Some(Notice::info(format!(
            "Removed order {order_id} from the delivery batch"
        ))),
    }
}

fn add_order(
    catalog: &OrderCatalog,
    state: &DeliverySelection,
    order_id: OrderId,
) -> Result<DeliveryTransition, CoreError> {
    let Some(order) = catalog.lookup(order_id) else {
        debug_assert!(false, "toggled order {order_id} is not in the catalog");
        return Err(CoreError::UnknownOrder(order_id));
    };

    if !order.is_deliverable() {
        return Err(SelectionRejection::OrderNotDeliverable {
            order_id,
            status: order.status,
        }
        .into());
    }

    match state.locked_customer {
        Some(locked) if locked != order.customer_id => {
            Err(SelectionRejection::DifferentCustomer {
                locked,
                attempted: order.customer_id,
            }
            .into())
        }
        _ => {
            let mut new_state: DeliverySelection = state.clone();
            new_state.selected.push(order_id);
            new_state.locked_customer = Some(order.customer_id);
            Ok(DeliveryTransition {
                new_state,
                notice: Some(Notice::info(format!(
                    "Added order {} to the delivery batch",
                    order.code
                ))),
            })
        }
    }
}

/// Select-all keeps the toggle-all-or-clear semantic: invoking it
/// while every deliverable order of the target customer is already
/// selected clears the selection instead.
fn select_all_for_customer(
    catalog: &OrderCatalog,
    state: &DeliverySelection,
    customer_id: Option<CustomerId>,
) -> DeliveryTransition {
    let target: Option<CustomerId> = if state.is_empty() {
        customer_id.or_else(|| catalog.first_deliverable().map(|order| order.customer_id))
    } else {
        state.locked_customer
    };

    let Some(target) = target else {
        // No candidate group anywhere in the list
        return DeliveryTransition {
            new_state: DeliverySelection::new(),
            notice: Some(Notice::warning(String::from(
                "No deliverable orders to select",
            ))),
        };
    };

    let eligible: Vec<OrderId> = catalog
        .deliverable_for(target)
        .map(|order: &Order| order.order_id)
        .collect();

    if eligible.is_empty() {
        return DeliveryTransition {
            new_state: DeliverySelection::new(),
            notice: Some(Notice::warning(format!(
                "Customer {target} has no deliverable orders"
            ))),
        };
    }

    let fully_selected: bool = eligible.iter().all(|id| state.is_selected(*id));
    if fully_selected && !state.is_empty() {
        return DeliveryTransition {
            new_state: DeliverySelection::new(),
            notice: Some(Notice::info(String::from("Selection cleared"))),
        };
    }

    let count: usize = eligible.len();
    DeliveryTransition {
        new_state: DeliverySelection {
            selected: eligible,
            locked_customer: Some(target),
        },
        notice: Some(Notice::info(format!(
            "Selected {count} deliverable orders of customer {target}"
        ))),
    }
}

/// Applies a proofing-allocation command to the current state,
/// producing a new state and an optional user-facing notice.
///
/// # Arguments
///
/// * `catalog` - The current fetched line item list
/// * `state` - The current allocation (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(ProofingTransition)` containing the new state
/// * `Err(CoreError::Rejected)` for business-rule violations
/// * `Err(CoreError::UnknownLineItem)` when a caller passes an id that
///   is neither selected nor in the catalog (a caller bug)
///
/// # Errors
///
/// Returns an error if the command violates the group-homogeneity or
/// availability rules, or references an unknown line item.
pub fn apply_proofing(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    command: ProofingCommand,
) -> Result<ProofingTransition, CoreError> {
    match command {
        ProofingCommand::Toggle { line_item_id } => {
            if state.is_selected(line_item_id) {
                let mut new_state: ProofingAllocation = state.clone();
                new_state.selected.retain(|id| *id != line_item_id);
                new_state.quantities.remove(&line_item_id);
                if new_state.selected.is_empty() {
                    new_state.locked_material = None;
                }
                return Ok(ProofingTransition {
                    new_state,
                    notice: Some(Notice::info(format!(
                        "Removed line item {line_item_id} from the run"
                    ))),
                });
            }
            add_line_item(catalog, state, line_item_id)
        }
        ProofingCommand::SetQuantity { line_item_id, raw } => {
            set_quantity(catalog, state, line_item_id, &raw)
        }
        ProofingCommand::Clear => Ok(ProofingTransition {
            new_state: ProofingAllocation::new(),
            notice: Some(Notice::info(String::from("Selection cleared"))),
        }),
    }
}

fn add_line_item(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    line_item_id: LineItemId,
) -> Result<ProofingTransition, CoreError> {
    let Some(item) = catalog.lookup(line_item_id) else {
        debug_assert!(false, "toggled line item {line_item_id} is not in the catalog");
        return Err(CoreError::UnknownLineItem(line_item_id));
    };

    if !item.has_available() {
        return Err(SelectionRejection::LineItemExhausted { line_item_id }.into());
    }

    match state.locked_material {
        Some(locked) if locked != item.material_type_id => {
            Err(SelectionRejection::DifferentMaterial {
                locked,
                attempted: item.material_type_id,
            }
            .into())
        }
        _ => {
            let mut new_state: ProofingAllocation = state.clone();
            new_state.selected.push(line_item_id);
            new_state.locked_material = Some(item.material_type_id);
            // Default policy: take everything that is available
            new_state
                .quantities
                .insert(line_item_id, item.available_quantity());
            Ok(ProofingTransition {
                new_state,
                notice: Some(Notice::info(format!(
                    "Added {} ({} available)",
                    item.description,
                    item.available_quantity()
                ))),
            })
        }
    }
}

/// Quantity edits parse then clamp. Non-numeric input leaves the state
/// untouched; it is never stored.
fn set_quantity(
    catalog: &LineItemCatalog,
    state: &ProofingAllocation,
    line_item_id: LineItemId,
    raw: &str,
) -> Result<ProofingTransition, CoreError> {
    let Some(item) = catalog.lookup(line_item_id) else {
        debug_assert!(false, "edited line item {line_item_id} is not in the catalog");
        return Err(CoreError::UnknownLineItem(line_item_id));
    };

    let Some(parsed) = parse_quantity(raw) else {
        // Silent rejection: the field keeps its previous value
        return Ok(ProofingTransition {
            new_state: state.clone(),
            notice: None,
        });
    };

    let clamped: u32 = clamp_to_available(parsed, item);
    let mut new_state: ProofingAllocation = state.clone();
    new_state.quantities.insert(line_item_id, clamped);
    Ok(ProofingTransition {
        new_state,
        notice: None,
    })
}

fn clamp_to_available(parsed: i64, item: &OrderLineItem) -> u32 {
    let available: i64 = i64::from(item.available_quantity());
    u32::try_from(parsed.clamp(0, available)).unwrap_or(0)
}
