// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_order_catalog, deliverable_order, toggle_order};
use crate::{
    CoreError, DeliveryCommand, DeliverySelection, DeliveryTransition, OrderCatalog,
    SelectionRejection, apply_delivery, validate_order_known,
};
use printflow_domain::{CustomerId, OrderId, OrderStatus};

#[test]
fn test_first_toggle_locks_customer() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = DeliverySelection::new();

    let transition: DeliveryTransition = toggle_order(&catalog, &state, 1).unwrap();

    assert_eq!(transition.new_state.selected, vec![OrderId::new(1)]);
    assert_eq!(
        transition.new_state.locked_customer,
        Some(CustomerId::new(1))
    );
    assert!(transition.notice.is_some());
}

#[test]
fn test_same_customer_order_joins_selection() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 1)
        .unwrap()
        .new_state;

    let transition: DeliveryTransition = toggle_order(&catalog, &state, 2).unwrap();

    assert_eq!(
        transition.new_state.selected,
        vec![OrderId::new(1), OrderId::new(2)]
    );
    assert_eq!(
        transition.new_state.locked_customer,
        Some(CustomerId::new(1))
    );
}

#[test]
fn test_other_customer_order_is_rejected() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 1)
        .unwrap()
        .new_state;

    let result: Result<DeliveryTransition, CoreError> = toggle_order(&catalog, &state, 3);

    assert_eq!(
        result,
        Err(CoreError::Rejected(SelectionRejection::DifferentCustomer {
            locked: CustomerId::new(1),
            attempted: CustomerId::new(2),
        }))
    );
    // Rejections leave the caller's state untouched by construction:
    // the state was borrowed immutably
    assert_eq!(state.selected, vec![OrderId::new(1)]);
}

#[test]
fn test_ineligible_order_is_rejected_even_on_empty_selection() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = DeliverySelection::new();

    let result: Result<DeliveryTransition, CoreError> = toggle_order(&catalog, &state, 4);

    assert_eq!(
        result,
        Err(CoreError::Rejected(
            SelectionRejection::OrderNotDeliverable {
                order_id: OrderId::new(4),
                status: OrderStatus::InProduction,
            }
        ))
    );
}

#[test]
fn test_toggle_removes_selected_order() {
    let catalog: OrderCatalog = create_order_catalog();
    let mut state: DeliverySelection = DeliverySelection::new();
    state = toggle_order(&catalog, &state, 1).unwrap().new_state;
    state = toggle_order(&catalog, &state, 2).unwrap().new_state;

    let transition: DeliveryTransition = toggle_order(&catalog, &state, 1).unwrap();

    assert_eq!(transition.new_state.selected, vec![OrderId::new(2)]);
    assert_eq!(
        transition.new_state.locked_customer,
        Some(CustomerId::new(1))
    );
}

#[test]
fn test_removing_last_order_clears_lock() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 1)
        .unwrap()
        .new_state;

    let transition: DeliveryTransition = toggle_order(&catalog, &state, 1).unwrap();

    assert!(transition.new_state.is_empty());
    assert_eq!(transition.new_state.locked_customer, None);
}

#[test]
fn test_double_toggle_is_a_net_no_op() {
    let catalog: OrderCatalog = create_order_catalog();
    let mut state: DeliverySelection = DeliverySelection::new();
    state = toggle_order(&catalog, &state, 1).unwrap().new_state;
    state = toggle_order(&catalog, &state, 2).unwrap().new_state;
    let before: DeliverySelection = state.clone();

    // Toggle a non-tail member: removal and re-add must cancel out
    state = toggle_order(&catalog, &state, 1).unwrap().new_state;
    state = toggle_order(&catalog, &state, 1).unwrap().new_state;

    // Membership, lock, and length are restored; the re-added id sits
    // at the tail
    let mut after_sorted: Vec<OrderId> = state.selected.clone();
    after_sorted.sort_unstable();
    let mut before_sorted: Vec<OrderId> = before.selected.clone();
    before_sorted.sort_unstable();
    assert_eq!(after_sorted, before_sorted);
    assert_eq!(state.locked_customer, before.locked_customer);
    assert_eq!(state.len(), before.len());
    assert_eq!(state.selected.last(), Some(&OrderId::new(1)));
}

#[test]
fn test_orphaned_selection_can_still_be_removed() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 1)
        .unwrap()
        .new_state;

    // The order disappears on refetch; removal must still succeed
    let refetched: OrderCatalog = OrderCatalog::new(vec![deliverable_order(2, 1, 200)]);
    let transition: DeliveryTransition = toggle_order(&refetched, &state, 1).unwrap();

    assert!(transition.new_state.is_empty());
    assert_eq!(transition.new_state.locked_customer, None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "not in the catalog")]
fn test_adding_unknown_order_fails_loudly_in_development() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = DeliverySelection::new();
    let _ = toggle_order(&catalog, &state, 99);
}

#[test]
fn test_validate_order_known() {
    let catalog: OrderCatalog = create_order_catalog();
    assert!(validate_order_known(&catalog, OrderId::new(1)).is_ok());
    assert_eq!(
        validate_order_known(&catalog, OrderId::new(99)),
        Err(CoreError::UnknownOrder(OrderId::new(99)))
    );
}

#[test]
fn test_select_all_infers_customer_from_first_deliverable() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = DeliverySelection::new();

    let transition: DeliveryTransition = apply_delivery(
        &catalog,
        &state,
        DeliveryCommand::SelectAllForCustomer { customer_id: None },
    )
    .unwrap();

    // Customer 1 is inferred; order 4 is not deliverable and stays out
    assert_eq!(
        transition.new_state.selected,
        vec![OrderId::new(1), OrderId::new(2)]
    );
    assert_eq!(
        transition.new_state.locked_customer,
        Some(CustomerId::new(1))
    );
}

#[test]
fn test_select_all_uses_locked_customer_when_selection_exists() {
    let catalog: OrderCatalog = OrderCatalog::new(vec![
        deliverable_order(1, 1, 100),
        deliverable_order(3, 2, 50),
        deliverable_order(5, 2, 80),
    ]);
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 3)
        .unwrap()
        .new_state;

    let transition: DeliveryTransition = apply_delivery(
        &catalog,
        &state,
        DeliveryCommand::SelectAllForCustomer {
            customer_id: Some(CustomerId::new(1)),
        },
    )
    .unwrap();

    // The explicit customer is ignored while a group is locked
    assert_eq!(
        transition.new_state.selected,
        vec![OrderId::new(3), OrderId::new(5)]
    );
    assert_eq!(
        transition.new_state.locked_customer,
        Some(CustomerId::new(2))
    );
}

#[test]
fn test_select_all_on_fully_selected_group_clears() {
    let catalog: OrderCatalog = create_order_catalog();
    let mut state: DeliverySelection = DeliverySelection::new();
    state = toggle_order(&catalog, &state, 1).unwrap().new_state;
    state = toggle_order(&catalog, &state, 2).unwrap().new_state;

    let transition: DeliveryTransition = apply_delivery(
        &catalog,
        &state,
        DeliveryCommand::SelectAllForCustomer { customer_id: None },
    )
    .unwrap();

    assert!(transition.new_state.is_empty());
    assert_eq!(transition.new_state.locked_customer, None);
}

#[test]
fn test_select_all_with_no_deliverable_orders_yields_empty_selection() {
    let catalog: OrderCatalog = OrderCatalog::empty();
    let state: DeliverySelection = DeliverySelection::new();

    let transition: DeliveryTransition = apply_delivery(
        &catalog,
        &state,
        DeliveryCommand::SelectAllForCustomer { customer_id: None },
    )
    .unwrap();

    assert!(transition.new_state.is_empty());
    assert_eq!(transition.new_state.locked_customer, None);
}

#[test]
fn test_clear_resets_everything() {
    let catalog: OrderCatalog = create_order_catalog();
    let state: DeliverySelection = toggle_order(&catalog, &DeliverySelection::new(), 1)
        .unwrap()
        .new_state;

    let transition: DeliveryTransition =
        apply_delivery(&catalog, &state, DeliveryCommand::Clear).unwrap();

    assert_eq!(transition.new_state, DeliverySelection::new());
}

#[test]
fn test_group_homogeneity_holds_across_arbitrary_toggles() {
    let catalog: OrderCatalog = create_order_catalog();
    let mut state: DeliverySelection = DeliverySelection::new();

    for id in [1_i64, 3, 2, 1, 3, 2, 1, 2] {
        if let Ok(transition) = toggle_order(&catalog, &state, id) {
            state = transition.new_state;
        }
        if let Some(locked) = state.locked_customer {
            for selected in &state.selected {
                let order = catalog.lookup(*selected).unwrap();
                assert_eq!(order.customer_id, locked);
            }
        } else {
            assert!(state.is_empty());
        }
    }
}
