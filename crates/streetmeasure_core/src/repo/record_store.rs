//! Generic durable record collection.
//!
//! # Responsibility
//! - Hold one insertion-ordered collection of records in memory.
//! - Mirror the whole collection to a key-value provider after every mutation.
//!
//! # Invariants
//! - The in-memory collection is the single source of truth once loaded.
//! - Every mutation rewrites the full serialized snapshot under one key.
//! - Missing or unreadable snapshots load as an empty collection.
//! - Persistence write failures are logged, never surfaced to callers.

use crate::repo::kv_store::KeyValueStore;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record kind that can live in a [`RecordStore`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Provider namespace the collection is stored in.
    const NAMESPACE: &'static str;
    /// Key the serialized collection is written under.
    const STORAGE_KEY: &'static str;

    /// Stable identifier, unique within the collection.
    fn id(&self) -> &str;
}

/// Insertion-ordered record collection persisted as one JSON snapshot.
///
/// Construction via [`RecordStore::init`] loads the snapshot; there is no
/// unloaded state. Mutations take `&mut self`, so a store has exactly one
/// writer at a time. Callers sharing a store across threads wrap it in their
/// own lock.
pub struct RecordStore<R: Record, P: KeyValueStore> {
    provider: P,
    records: Vec<R>,
}

impl<R: Record, P: KeyValueStore> RecordStore<R, P> {
    /// Loads the persisted collection from `provider`.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty collection.
    /// Corruption is reported with a `warn` event and otherwise ignored.
    pub fn init(provider: P) -> Self {
        let records = load_records(&provider);
        Self { provider, records }
    }

    /// Re-reads the persisted snapshot, replacing the in-memory collection.
    ///
    /// Any in-memory change not yet persisted is discarded.
    pub fn reload(&mut self) {
        self.records = load_records(&self.provider);
    }

    /// Appends `record` and persists the collection.
    ///
    /// Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, record: R) -> R {
        self.records.push(record.clone());
        self.persist();
        info!(
            "event=record_add module=repo status=ok namespace={} id={} total={}",
            R::NAMESPACE,
            record.id(),
            self.records.len()
        );
        record
    }

    /// Returns a snapshot copy of all records in insertion order.
    pub fn list(&self) -> Vec<R> {
        debug!(
            "event=record_list module=repo status=ok namespace={} total={}",
            R::NAMESPACE,
            self.records.len()
        );
        self.records.clone()
    }

    /// Returns the first record whose id equals `id`.
    pub fn get_by_id(&self, id: &str) -> Option<R> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Removes every record with `id`; persists only when something was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = before - self.records.len();
        if removed == 0 {
            debug!(
                "event=record_delete module=repo status=miss namespace={} id={}",
                R::NAMESPACE,
                id
            );
            return false;
        }

        self.persist();
        info!(
            "event=record_delete module=repo status=ok namespace={} id={} removed={}",
            R::NAMESPACE,
            id,
            removed
        );
        true
    }

    /// Empties the collection and persists the empty snapshot.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
        info!(
            "event=record_clear module=repo status=ok namespace={}",
            R::NAMESPACE
        );
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(err) => {
                error!(
                    "event=record_persist module=repo status=error namespace={} error_code=serialize_failed error={}",
                    R::NAMESPACE,
                    err
                );
                return;
            }
        };

        if let Err(err) = self.provider.put(R::STORAGE_KEY, &json) {
            error!(
                "event=record_persist module=repo status=error namespace={} error_code=write_failed error={}",
                R::NAMESPACE,
                err
            );
        }
    }
}

fn load_records<R: Record>(provider: &impl KeyValueStore) -> Vec<R> {
    let json = match provider.get(R::STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => {
            info!(
                "event=record_load module=repo status=empty namespace={}",
                R::NAMESPACE
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=record_load module=repo status=error namespace={} error_code=read_failed error={}",
                R::NAMESPACE,
                err
            );
            return Vec::new();
        }
    };

    // A literal `null` snapshot is treated like a missing one.
    match serde_json::from_str::<Option<Vec<R>>>(&json) {
        Ok(records) => {
            let records = records.unwrap_or_default();
            info!(
                "event=record_load module=repo status=ok namespace={} total={}",
                R::NAMESPACE,
                records.len()
            );
            records
        }
        Err(err) => {
            warn!(
                "event=record_load module=repo status=error namespace={} error_code=corrupt_snapshot error={}",
                R::NAMESPACE,
                err
            );
            Vec::new()
        }
    }
}
