// Rust guideline compliant 2026-02-06

//! Dohas Core Library
//!
//! This crate provides the foundational components for the Dohas flashcard deck:
//! - Data models (Challenge, Doha, Language, SortOrder)
//! - Id filter parsing (`"1-12,33,40+"`)
//! - Sorting and flattening of challenges into a doha sequence
//! - Reconciliation of a stale selection against a freshly loaded dataset
//! - The three-slot deck rotator
//! - Durable key-value file storage and bundled default datasets
//! - Configuration and error types

pub mod bundled;
pub mod config;
pub mod deck;
pub mod error;
pub mod filter;
pub mod models;
pub mod reconcile;
pub mod sort;
pub mod storage;

pub use config::{Config, RemoteConfig};
pub use deck::{DeckRotator, Slot, DECK_SIZE};
pub use error::{Error, Result};
pub use filter::{IdFilter, IdRange};
pub use models::{validate_dataset, Challenge, DeckMode, Doha, Language, SortOrder};
pub use reconcile::{reconcile, Reconciled};
pub use sort::{sort_and_flatten, sort_challenges, sort_dohas};
pub use storage::FileStore;
