// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flow controllers.
//!
//! One controller per page: it owns the fetched catalog, the selection
//! state, the notice queue, and the pagination query, and it is the
//! only writer of all four. Rejections become warning notices and
//! leave the state untouched; only a confirmed sink success resets a
//! selection.

use crate::error::ApiError;
use crate::paging::ListQuery;
use crate::request_response::{
    CreateDeliveryNoteRequest, CreateDeliveryNoteResponse, CreateProofingOrderRequest,
    CreateProofingOrderResponse,
};
use crate::source::{DeliveryNoteSink, LineItemSource, OrderSource, ProofingOrderSink};
use printflow::{
    CoreError, DeliveryCommand, DeliverySelection, DeliverySummary, LineItemCatalog, OrderCatalog,
    ProofingAllocation, ProofingCommand, ProofingSummary, apply_delivery, apply_proofing,
    delivery_summary, proofing_summary, validate_delivery_submit, validate_proofing_submit,
};
use printflow_domain::{CustomerId, LineItemId, Order, OrderId, OrderLineItem, OrderStatus};
use printflow_notify::{Notice, NoticeLog};

/// Controller of the delivery-note creation page.
#[derive(Debug)]
pub struct DeliveryFlow<S, K> {
    source: S,
    sink: K,
    query: ListQuery,
    catalog: OrderCatalog,
    state: DeliverySelection,
    notices: NoticeLog,
}

impl<S: OrderSource, K: DeliveryNoteSink> DeliveryFlow<S, K> {
    /// Creates a flow with nothing fetched and nothing selected.
    #[must_use]
    pub const fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            query: ListQuery::new(),
            catalog: OrderCatalog::empty(),
            state: DeliverySelection::new(),
            notices: NoticeLog::new(),
        }
    }

    /// Replaces the catalog with a freshly fetched page.
    ///
    /// A stranded page (the result set shrank below the current page)
    /// is clamped back and refetched, so one refresh always lands on
    /// a populated page when records exist. The selection is kept as
    /// ids; entries whose record left the page become orphans and are
    /// tolerated until submit.
    ///
    /// # Errors
    ///
    /// Propagates the source's transport error; catalog and selection
    /// are unchanged in that case.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let mut page = self.source.fetch_orders(&self.query).await?;
        let requested: u32 = self.query.page;
        self.query.clamp_to(page.total);
        if self.query.page != requested {
            page = self.source.fetch_orders(&self.query).await?;
        }
        self.catalog = OrderCatalog::new(page.items);
        Ok(())
    }

    /// Toggles one order in or out of the selection.
    ///
    /// Business-rule rejections become warning notices; the selection
    /// is unchanged. Unknown ids are caller bugs and are only logged.
    pub fn toggle(&mut self, order_id: OrderId) {
        self.run(DeliveryCommand::Toggle { order_id });
    }

    /// Selects every deliverable order of the target customer, or
    /// clears the selection if they already all are selected.
    pub fn select_all(&mut self, customer_id: Option<CustomerId>) {
        self.run(DeliveryCommand::SelectAllForCustomer { customer_id });
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.run(DeliveryCommand::Clear);
    }

    fn run(&mut self, command: DeliveryCommand) {
        match apply_delivery(&self.catalog, &self.state, command) {
            Ok(transition) => {
                self.state = transition.new_state;
                if let Some(notice) = transition.notice {
                    self.notices.push(notice);
                }
            }
            Err(CoreError::Rejected(rejection)) => {
                tracing::warn!("delivery selection rejected: {rejection}");
                self.notices.push(Notice::warning(rejection.to_string()));
            }
            Err(err) => {
                tracing::warn!("ignoring invalid delivery command: {err}");
            }
        }
    }

    /// Moves to a page; call `refresh` afterwards to load it.
    pub const fn set_page(&mut self, page: u32) {
        self.query.set_page(page);
    }

    /// Changes the status filter and resets to the first page.
    pub const fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.query.set_status(status);
    }

    /// Changes the customer filter and resets to the first page.
    pub const fn set_customer_filter(&mut self, customer: Option<CustomerId>) {
        self.query.set_customer(customer);
    }

    /// Returns the current pagination/filter query.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Returns the currently fetched orders.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.catalog.orders()
    }

    /// Returns the current selection state.
    #[must_use]
    pub const fn selection(&self) -> &DeliverySelection {
        &self.state
    }

    /// Returns the derived count/total aggregate for display.
    #[must_use]
    pub fn summary(&self) -> DeliverySummary {
        delivery_summary(&self.catalog, &self.state)
    }

    /// Removes and returns all pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Returns the submission sink.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Validates the selection, submits it, and resets on confirmed
    /// success only.
    ///
    /// # Errors
    ///
    /// * `ApiError::SubmitPrecondition` with the specific stale-data
    ///   or precondition reason; selection retained
    /// * the sink's transport error; selection retained
    pub async fn submit(&mut self) -> Result<CreateDeliveryNoteResponse, ApiError> {
        let draft = validate_delivery_submit(&self.catalog, &self.state).map_err(|err| {
            tracing::warn!("delivery submit blocked: {err}");
            self.notices.push(Notice::warning(err.to_string()));
            ApiError::from(err)
        })?;

        let request = CreateDeliveryNoteRequest::from_draft(&draft);
        match self.sink.create_delivery_note(request).await {
            Ok(response) => {
                tracing::info!(
                    "delivery note {} created with {} orders",
                    response.delivery_note_id,
                    response.order_count
                );
                self.state = DeliverySelection::new();
                self.notices.push(Notice::info(response.message.clone()));
                Ok(response)
            }
            Err(err) => {
                self.notices.push(Notice::warning(err.to_string()));
                Err(err)
            }
        }
    }
}

/// Controller of the proofing-order creation page.
#[derive(Debug)]
pub struct ProofingFlow<S, K> {
    source: S,
    sink: K,
    catalog: LineItemCatalog,
    state: ProofingAllocation,
    sheet_count: String,
    notices: NoticeLog,
}

impl<S: LineItemSource, K: ProofingOrderSink> ProofingFlow<S, K> {
    /// Creates a flow with nothing fetched and nothing selected.
    #[must_use]
    pub const fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            catalog: LineItemCatalog::empty(),
            state: ProofingAllocation::new(),
            sheet_count: String::new(),
            notices: NoticeLog::new(),
        }
    }

    /// Replaces the catalog with freshly fetched line items.
    ///
    /// # Errors
    ///
    /// Propagates the source's transport error; catalog and state are
    /// unchanged in that case.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let items = self.source.fetch_available().await?;
        self.catalog = LineItemCatalog::new(items);
        Ok(())
    }

    /// Toggles one line item in or out of the selection.
    pub fn toggle(&mut self, line_item_id: LineItemId) {
        self.run(ProofingCommand::Toggle { line_item_id });
    }

    /// Edits the quantity to take from one line item.
    pub fn set_quantity(&mut self, line_item_id: LineItemId, raw: impl Into<String>) {
        self.run(ProofingCommand::SetQuantity {
            line_item_id,
            raw: raw.into(),
        });
    }

    /// Clears the selection and quantities.
    pub fn clear(&mut self) {
        self.run(ProofingCommand::Clear);
    }

    fn run(&mut self, command: ProofingCommand) {
        match apply_proofing(&self.catalog, &self.state, command) {
            Ok(transition) => {
                self.state = transition.new_state;
                if let Some(notice) = transition.notice {
                    self.notices.push(notice);
                }
            }
            Err(CoreError::Rejected(rejection)) => {
                tracing::warn!("proofing selection rejected: {rejection}");
                self.notices.push(Notice::warning(rejection.to_string()));
            }
            Err(err) => {
                tracing::warn!("ignoring invalid proofing command: {err}");
            }
        }
    }

    /// Stores the raw total-sheet-count input; validated at submit.
    pub fn set_sheet_count(&mut self, raw: impl Into<String>) {
        self.sheet_count = raw.into();
    }

    /// Returns the raw total-sheet-count input as last typed.
    #[must_use]
    pub fn sheet_count_raw(&self) -> &str {
        &self.sheet_count
    }

    /// Returns the currently fetched line items.
    #[must_use]
    pub fn line_items(&self) -> &[OrderLineItem] {
        self.catalog.items()
    }

    /// Returns the current allocation state.
    #[must_use]
    pub const fn allocation(&self) -> &ProofingAllocation {
        &self.state
    }

    /// Returns the derived quantity aggregate for display.
    #[must_use]
    pub fn summary(&self) -> ProofingSummary {
        proofing_summary(&self.state)
    }

    /// Removes and returns all pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Returns the submission sink.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Validates the allocation, submits it, and resets on confirmed
    /// success only. The sheet-count field is cleared together with
    /// the selection.
    ///
    /// # Errors
    ///
    /// * `ApiError::SubmitPrecondition` with the specific reason;
    ///   allocation retained
    /// * the sink's transport error; allocation retained
    pub async fn submit(&mut self) -> Result<CreateProofingOrderResponse, ApiError> {
        let draft = validate_proofing_submit(&self.catalog, &self.state, &self.sheet_count)
            .map_err(|err| {
                tracing::warn!("proofing submit blocked: {err}");
                self.notices.push(Notice::warning(err.to_string()));
                ApiError::from(err)
            })?;

        let request = CreateProofingOrderRequest::from_draft(&draft);
        match self.sink.create_proofing_order(request).await {
            Ok(response) => {
                tracing::info!("proofing order {} created", response.proofing_order_id);
                self.state = ProofingAllocation::new();
                self.sheet_count.clear();
                self.notices.push(Notice::info(response.message.clone()));
                Ok(response)
            }
            Err(err) => {
                self.notices.push(Notice::warning(err.to_string()));
                Err(err)
            }
        }
    }
}
