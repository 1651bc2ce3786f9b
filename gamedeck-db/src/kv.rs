//! SQLite-backed named-entry store.
//!
//! Each entry is an independent key with a JSON text payload, mirroring the
//! two-entry local store the application persists into. An optional quota
//! caps the size of a single entry so callers can distinguish "storage full"
//! from every other failure.

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage quota exceeded for entry '{key}': {size} bytes (limit {limit})")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },
}

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

/// A named-entry store over a single SQLite table.
pub struct KvStore {
    conn: Connection,
    max_entry_bytes: Option<usize>,
}

impl KvStore {
    /// Open or create a store at the given path.
    pub fn open(path: &std::path::Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn,
            max_entry_bytes: None,
        })
    }

    /// Open an in-memory store. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn,
            max_entry_bytes: None,
        })
    }

    /// Cap the size of a single entry. Writes beyond the cap fail with
    /// [`StoreError::QuotaExceeded`] and leave the prior value intact.
    pub fn with_quota(mut self, max_entry_bytes: usize) -> Self {
        self.max_entry_bytes = Some(max_entry_bytes);
        self
    }

    /// Read an entry, or `None` if the key has never been written.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write an entry, replacing any existing value.
    pub fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.put_many(&[(key, value)])
    }

    /// Write several entries as one unit: either every entry is written or
    /// none are.
    ///
    /// All values are checked against the quota before anything is written,
    /// and the writes themselves share one transaction, so a failure part
    /// way through leaves every prior value intact.
    pub fn put_many(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        if let Some(limit) = self.max_entry_bytes {
            for (key, value) in entries {
                if value.len() > limit {
                    return Err(StoreError::QuotaExceeded {
                        key: key.to_string(),
                        size: value.len(),
                        limit,
                    });
                }
            }
        }
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            tx.execute(
                "INSERT INTO entries (key, value, updated_at)
                 VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Remove an entry. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM entries WHERE key = ?1", params![key])?;
        Ok(())
    }
}
