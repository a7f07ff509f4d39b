// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sf-core: Shared data model for the storefront client.
//!
//! This crate holds everything that does not touch the network: resource
//! references, the optimistic membership set and its per-ref state machine,
//! response envelope classification, domain records, validated request
//! payloads, and the session reducer.

pub mod assets;
pub mod envelope;
pub mod error;
pub mod forms;
pub mod models;
pub mod optimistic;
pub mod payload;
pub mod resource;
pub mod session;

pub use assets::AssetKind;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use models::{
    Bookmark, Category, NamedRef, Notification, Page, Review, ReviewAuthor, Slider, Subcategory,
    User, Vendor,
};
pub use optimistic::{
    OptimisticSet, PendingMutation, Settlement, SettlementPolicy, ToggleIntent, ToggleState,
};
pub use payload::{FilePart, MultipartForm, Payload};
pub use resource::ResourceRef;
pub use session::{reduce, Action, AppState, Role};
