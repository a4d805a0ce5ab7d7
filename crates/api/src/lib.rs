// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary layer.
//!
//! Everything that is not pure selection logic lives here: the wire
//! DTOs, the collaborator contracts (record source and submission
//! sink), pagination/filter state, dashboard aggregation, and the flow
//! controllers that tie catalog + selection + notices together for a
//! view. The actual HTTP client behind the contracts is someone
//! else's crate.

mod dashboard;
mod error;
mod flows;
mod paging;
mod request_response;
mod source;

#[cfg(test)]
mod tests;

pub use dashboard::{DebtLedger, KpiAccumulator, KpiTotals};
pub use error::ApiError;
pub use flows::{DeliveryFlow, ProofingFlow};
pub use paging::{DEFAULT_PAGE_SIZE, ListQuery, Page, paginate};
pub use request_response::{
    CreateDeliveryNoteRequest, CreateDeliveryNoteResponse, CreateProofingOrderRequest,
    CreateProofingOrderResponse, ProofingItemDto,
};
pub use source::{DeliveryNoteSink, LineItemSource, OrderSource, ProofingOrderSink};
