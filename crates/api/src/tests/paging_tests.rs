// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::paging::{DEFAULT_PAGE_SIZE, ListQuery, Page, paginate};
use crate::tests::helpers::{create_order, deliverable_order};
use printflow_domain::{CustomerId, Order, OrderStatus};

#[test]
fn test_new_query_starts_on_first_page_unfiltered() {
    let query: ListQuery = ListQuery::new();

    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(query.status, None);
    assert_eq!(query.customer, None);
}

#[test]
fn test_zero_page_size_is_floored_to_one() {
    let query: ListQuery = ListQuery::with_page_size(0);

    assert_eq!(query.page_size, 1);
}

#[test]
fn test_set_page_floors_to_one() {
    let mut query: ListQuery = ListQuery::new();

    query.set_page(0);

    assert_eq!(query.page, 1);
}

#[test]
fn test_filter_change_resets_to_first_page() {
    let mut query: ListQuery = ListQuery::new();
    query.set_page(5);

    query.set_status(Some(OrderStatus::Completed));
    assert_eq!(query.page, 1);

    query.set_page(3);
    query.set_customer(Some(CustomerId::new(7)));
    assert_eq!(query.page, 1);
}

#[test]
fn test_matches_applies_both_filters() {
    let mut query: ListQuery = ListQuery::new();
    query.set_status(Some(OrderStatus::Completed));
    query.set_customer(Some(CustomerId::new(1)));

    let matching: Order = deliverable_order(1, 1, 100);
    let wrong_status: Order = create_order(2, 1, OrderStatus::Pending, 100);
    let wrong_customer: Order = deliverable_order(3, 2, 100);

    assert!(query.matches(&matching));
    assert!(!query.matches(&wrong_status));
    assert!(!query.matches(&wrong_customer));
}

#[test]
fn test_page_count_rounds_up_and_never_reports_zero() {
    let query: ListQuery = ListQuery::with_page_size(20);

    assert_eq!(query.page_count(0), 1);
    assert_eq!(query.page_count(1), 1);
    assert_eq!(query.page_count(20), 1);
    assert_eq!(query.page_count(21), 2);
    assert_eq!(query.page_count(40), 2);
}

#[test]
fn test_clamp_pulls_a_stranded_page_back() {
    let mut query: ListQuery = ListQuery::with_page_size(20);
    query.set_page(5);

    query.clamp_to(21);

    assert_eq!(query.page, 2);
}

#[test]
fn test_clamp_leaves_a_valid_page_alone() {
    let mut query: ListQuery = ListQuery::with_page_size(20);
    query.set_page(2);

    query.clamp_to(45);

    assert_eq!(query.page, 2);
}

#[test]
fn test_offset_follows_page_and_size() {
    let mut query: ListQuery = ListQuery::with_page_size(15);
    assert_eq!(query.offset(), 0);

    query.set_page(3);
    assert_eq!(query.offset(), 30);
}

#[test]
fn test_paginate_slices_the_middle_page() {
    let items: Vec<i32> = (1..=7).collect();

    let page: Page<i32> = paginate(&items, 2, 3);

    assert_eq!(page.items, vec![4, 5, 6]);
    assert_eq!(page.total, 7);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 3);
}

#[test]
fn test_paginate_past_the_end_is_empty_with_total() {
    let items: Vec<i32> = (1..=7).collect();

    let page: Page<i32> = paginate(&items, 9, 3);

    assert!(page.items.is_empty());
    assert_eq!(page.total, 7);
}

#[test]
fn test_page_round_trips_through_serde() {
    let page: Page<i32> = paginate(&[10, 20, 30], 1, 2);

    let json: String = serde_json::to_string(&page).unwrap();
    let back: Page<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, page);
}
