//! Domain model for measurement display and persisted records.
//!
//! # Responsibility
//! - Define display units and their rounding/formatting rules.
//! - Define the persisted record kinds (projects and tile samples).
//!
//! # Invariants
//! - Every persisted record is identified by a stable string id.
//! - Records are never edited in place; they are added or deleted.

pub mod display_unit;
pub mod geometry;
pub mod project;
pub mod tile_sample;
