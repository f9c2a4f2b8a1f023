//! Key-value persistence providers.
//!
//! # Responsibility
//! - Define the minimal `get`/`put` contract record stores persist through.
//! - Provide a SQLite-backed provider and an in-memory provider.
//!
//! # Invariants
//! - `put` replaces the whole value under a key in one atomic write.
//! - Providers are scoped to one namespace; keys never leak across namespaces.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

pub type KvResult<T> = Result<T, KvError>;

/// Persistence provider failure.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Provider cannot serve requests (e.g. poisoned in-memory state).
    Unavailable(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "key-value store unavailable: {message}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string key-value storage used to persist collection snapshots.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> KvResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).put(key, value)
    }
}

/// SQLite-backed provider scoped to one namespace of `kv_entries`.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
    namespace: String,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Creates a provider over a migrated connection (see [`crate::db::open_db`]).
    pub fn new(conn: &'conn Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
                params![self.namespace.as_str(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (namespace, key, value)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(namespace, key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.namespace.as_str(), key, value],
        )?;
        Ok(())
    }
}

/// Process-local provider; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| KvError::Unavailable(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| KvError::Unavailable(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
