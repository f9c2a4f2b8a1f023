//! Repository layer: persistence providers and record collections.
//!
//! # Responsibility
//! - Define the key-value contract record persistence goes through.
//! - Keep SQL and serialization details out of the service layer.
//!
//! # Invariants
//! - Record stores are the only writers of their collection snapshot.
//! - Lookups report absence as `None`, never as an error.

pub mod kv_store;
pub mod record_store;
