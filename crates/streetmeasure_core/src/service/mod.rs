//! Core use-case services.
//!
//! # Responsibility
//! - Build new records the way the save flow expects (ids, timestamps, names).
//! - Provide display labels for saved records.
//! - Compose the record stores into one application-owned catalog.
//!
//! # Invariants
//! - Services never bypass record store persistence contracts.

pub mod catalog;
pub mod labels;
pub mod save_flow;
