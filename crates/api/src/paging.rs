// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pagination and filter state shared by the list views.
//!
//! Filter edits always reset to the first page; page numbers clamp to
//! the page count reported by the last fetch, so a shrinking result
//! set never leaves a view pointing past the end.

use printflow_domain::{CustomerId, Order, OrderStatus};

/// Default page size of the list views.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination and filter state of one list view.
///
/// Pages are 1-based, matching what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// The 1-based page number.
    pub page: u32,
    /// Records per page, at least 1.
    pub page_size: u32,
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional customer filter.
    pub customer: Option<CustomerId>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListQuery {
    /// Creates a query for the first page with the default page size
    /// and no filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
            customer: None,
        }
    }

    /// Creates a query with an explicit page size (floored to 1).
    #[must_use]
    pub const fn with_page_size(page_size: u32) -> Self {
        let page_size: u32 = if page_size == 0 { 1 } else { page_size };
        Self {
            page: 1,
            page_size,
            status: None,
            customer: None,
        }
    }

    /// Moves to a page (floored to 1). Clamping against the total is
    /// done by `clamp_to` once a fetch reports the total.
    pub const fn set_page(&mut self, page: u32) {
        self.page = if page == 0 { 1 } else { page };
    }

    /// Changes the status filter and resets to the first page.
    pub const fn set_status(&mut self, status: Option<OrderStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Changes the customer filter and resets to the first page.
    pub const fn set_customer(&mut self, customer: Option<CustomerId>) {
        self.customer = customer;
        self.page = 1;
    }

    /// Returns whether an order passes the current filters.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(customer) = self.customer {
            if order.customer_id != customer {
                return false;
            }
        }
        true
    }

    /// Returns the number of pages a result set of `total` records
    /// spans, never less than 1.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> u32 {
        let page_size: usize = self.page_size as usize;
        let pages: usize = total.div_ceil(page_size);
        if pages == 0 {
            1
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let pages: u32 = if pages > u32::MAX as usize {
                u32::MAX
            } else {
                pages as u32
            };
            pages
        }
    }

    /// Clamps the page to the page count of a `total`-record result
    /// set. Called after every fetch so a shrinking list pulls the
    /// view back to the last page.
    pub const fn clamp_to(&mut self, total: usize) {
        let pages: u32 = self.page_count(total);
        if self.page > pages {
            self.page = pages;
        }
    }

    /// Returns the record offset of the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

/// One page of a fetched result set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    /// The records of this page.
    pub items: Vec<T>,
    /// Total records across all pages, after filtering.
    pub total: usize,
    /// The 1-based page number.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

/// Slices one page out of an in-memory, already filtered list.
///
/// Shared by tests and in-memory sources; a real backend paginates in
/// its query instead.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> Page<T> {
    let page: u32 = if page == 0 { 1 } else { page };
    let page_size: u32 = if page_size == 0 { 1 } else { page_size };
    let offset: usize = (page as usize - 1) * page_size as usize;
    let slice: Vec<T> = items
        .iter()
        .skip(offset)
        .take(page_size as usize)
        .cloned()
        .collect();
    Page {
        items: slice,
        total: items.len(),
        page,
        page_size,
    }
}
