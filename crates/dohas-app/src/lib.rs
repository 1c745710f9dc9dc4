// Rust guideline compliant 2026-02-09

//! Application services for Dohas.
//!
//! This crate provides the content store that the presentation layer drives:
//! language switching, filtering, sorting, randomisation, deck rotation,
//! remote refresh, and change subscriptions, together with the storage and
//! remote-content seams it depends on.

pub mod error;
pub mod persistence;
pub mod remote;
pub mod response;
pub mod store;
pub mod subscribe;

pub use error::{AppError, ErrorCode, Result};
pub use persistence::ContentStorage;
pub use remote::{HttpRemote, RemoteSource};
pub use response::{ErrorReport, RefreshReport};
pub use store::{ChallengeStore, InitialState, Notice, NoticeKind, StoreState};
pub use subscribe::Subscription;
