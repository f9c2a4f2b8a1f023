//! Core domain logic for StreetMeasure.
//! Distance display rules and durable storage of saved measurements.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::display_unit::{
    DisplayUnit, DisplayUnitSpec, FeetInchUnit, FeetInches, MeterUnit, RoundedDistance,
    UnitConfigError,
};
pub use model::geometry::Point3;
pub use model::project::ProjectMeasurement;
pub use model::tile_sample::TileSample;
pub use repo::kv_store::{
    KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore,
};
pub use repo::record_store::{Record, RecordStore};
pub use service::catalog::MeasurementCatalog;
pub use service::labels::{
    format_area_ft2, format_display_name, format_tile_summary, format_timestamp,
};
pub use service::save_flow::{
    Clock, IdGenerator, SaveFlow, SystemClock, TileDimensions, UuidGenerator,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
