// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sf-client: REST data access for the storefront service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────┐     ┌─────────────┐     ┌──────────┐
//! │ StorefrontApi│────►│ RemoteResourceClient │────►│  Transport  │────►│   REST   │
//! │  (typed ops) │◄────│  (envelopes, errors) │◄────│   (trait)   │◄────│  server  │
//! └──────────────┘     └──────────────────────┘     └─────────────┘     └──────────┘
//!        │
//!        ▼
//! ┌──────────────────┐        ┌──────────────┐
//! │ OptimisticHandle │        │ SessionStore │  (signed-in user, subscribers)
//! │ (toggle/rollback)│        └──────────────┘
//! └──────────────────┘
//! ```
//!
//! # Features
//!
//! - JSON and multipart requests over `reqwest`, every call bounded by a timeout
//! - Typed error taxonomy: transport, protocol, validation
//! - Defensive envelope parsing that degrades to empty collections
//! - Optimistic toggles with rollback and an opt-in sequencing policy
//! - Injectable transport trait for testing

mod api;
mod client;
mod error;
mod notice;
mod store;
mod toggle;
mod transport;

pub use api::StorefrontApi;
pub use client::{expect_success, ClientConfig, RemoteResourceClient};
pub use error::{ClientError, ClientResult};
pub use notice::{degrade, Notice, NoticeLevel, NoticeLog, NoticeSink};
pub use store::SessionStore;
pub use toggle::{toggle_optimistic, InFlightToggle, OptimisticHandle, ToggleOutcome};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, Transport, TransportError, TransportResult,
};

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod api_tests;
