//! Application-owned catalog of saved measurements.
//!
//! # Responsibility
//! - Own exactly one project store and one tile sample store.
//! - Wire both stores to their own persistence namespace.
//!
//! Constructed once by the application and passed by reference; there is no
//! process-wide instance.

use crate::model::project::{ProjectMeasurement, PROJECT_NAMESPACE};
use crate::model::tile_sample::{TileSample, TILE_SAMPLE_NAMESPACE};
use crate::repo::kv_store::{KeyValueStore, SqliteKeyValueStore};
use crate::repo::record_store::RecordStore;
use rusqlite::Connection;

/// Project and tile sample collections of one application instance.
pub struct MeasurementCatalog<P: KeyValueStore> {
    projects: RecordStore<ProjectMeasurement, P>,
    tile_samples: RecordStore<TileSample, P>,
}

impl<P: KeyValueStore> MeasurementCatalog<P> {
    /// Loads both collections from their providers.
    pub fn new(projects_provider: P, tile_samples_provider: P) -> Self {
        Self {
            projects: RecordStore::init(projects_provider),
            tile_samples: RecordStore::init(tile_samples_provider),
        }
    }

    pub fn projects(&self) -> &RecordStore<ProjectMeasurement, P> {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut RecordStore<ProjectMeasurement, P> {
        &mut self.projects
    }

    pub fn tile_samples(&self) -> &RecordStore<TileSample, P> {
        &self.tile_samples
    }

    pub fn tile_samples_mut(&mut self) -> &mut RecordStore<TileSample, P> {
        &mut self.tile_samples
    }

    /// Reloads both collections from persistence, discarding in-memory state.
    pub fn reload(&mut self) {
        self.projects.reload();
        self.tile_samples.reload();
    }
}

impl<'conn> MeasurementCatalog<SqliteKeyValueStore<'conn>> {
    /// Opens both collections over one migrated SQLite connection.
    pub fn open_sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteKeyValueStore::new(conn, PROJECT_NAMESPACE),
            SqliteKeyValueStore::new(conn, TILE_SAMPLE_NAMESPACE),
        )
    }
}
