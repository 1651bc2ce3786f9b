//! Persistence gateway: catalog and client registry serialization,
//! snapshot export/import, and factory reset.
//!
//! The two collections live in two independent entries so that a failure
//! writing one never corrupts the other. Loading falls back to the built-in
//! seed dataset when an entry is missing or unreadable; genuine storage
//! failures propagate.

use chrono::Utc;
use gamedeck_catalog::types::{Client, Game, SNAPSHOT_VERSION, Snapshot};
use gamedeck_catalog::{default_clients, default_games};
use log::{info, warn};
use thiserror::Error;

use crate::kv::{KvStore, StoreError};

/// Entry holding the JSON-serialized games collection.
pub const GAMES_KEY: &str = "gamedeck_games";
/// Entry holding the JSON-serialized clients collection.
pub const CLIENTS_KEY: &str = "gamedeck_clients";

#[derive(Debug, Error)]
pub enum ImportError {
    /// The snapshot file is malformed. Nothing was mutated.
    #[error("invalid backup file: {0}")]
    Invalid(String),
    /// The underlying store rejected the write (e.g. quota). Existing data
    /// is left intact.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Read/write access to the two persisted collections.
pub struct Gateway {
    store: KvStore,
}

impl Gateway {
    /// Open or create the backing store at the given path.
    pub fn open(path: &std::path::Path) -> Result<Self, StoreError> {
        Ok(Self {
            store: KvStore::open(path)?,
        })
    }

    /// Open an in-memory gateway. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self {
            store: KvStore::open_memory()?,
        })
    }

    /// Wrap an already-configured store (e.g. one with a quota).
    pub fn with_store(store: KvStore) -> Self {
        Self { store }
    }

    // ── Write-through saves ─────────────────────────────────────────────

    /// Persist the full games collection.
    pub fn save_games(&self, games: &[Game]) -> Result<(), StoreError> {
        let json = serde_json::to_string(games)?;
        self.store.put(GAMES_KEY, &json)
    }

    /// Persist the full clients collection.
    pub fn save_clients(&self, clients: &[Client]) -> Result<(), StoreError> {
        let json = serde_json::to_string(clients)?;
        self.store.put(CLIENTS_KEY, &json)
    }

    // ── Loads with seed fallback ────────────────────────────────────────

    /// Load the games collection, falling back to the seed list when the
    /// entry is missing or does not parse.
    pub fn load_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.load_entry(GAMES_KEY)?.unwrap_or_else(default_games))
    }

    /// Load the clients collection, falling back to the seed accounts when
    /// the entry is missing or does not parse.
    pub fn load_clients(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.load_entry(CLIENTS_KEY)?.unwrap_or_else(default_clients))
    }

    fn load_entry<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key)? else {
            info!("no '{key}' entry found, using seed data");
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("entry '{key}' is unreadable ({e}), using seed data");
                Ok(None)
            }
        }
    }

    // ── Snapshot export/import ──────────────────────────────────────────

    /// Serialize a snapshot of the given collections as a downloadable
    /// JSON artifact.
    pub fn snapshot_json(&self, games: &[Game], clients: &[Client]) -> Result<String, StoreError> {
        let snapshot = export_snapshot(games, clients);
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Persist both collections from a validated snapshot as a single
    /// atomic write. On failure (including quota) both previously
    /// persisted entries remain intact.
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let games_json = serde_json::to_string(&snapshot.games)?;
        let clients_json = serde_json::to_string(&snapshot.clients)?;
        self.store
            .put_many(&[(GAMES_KEY, &games_json), (CLIENTS_KEY, &clients_json)])?;
        info!(
            "imported snapshot: {} games, {} clients",
            snapshot.games.len(),
            snapshot.clients.len()
        );
        Ok(())
    }

    // ── Factory reset ───────────────────────────────────────────────────

    /// Erase both persisted entries and restore the built-in defaults.
    ///
    /// Destructive and irreversible within the local store; callers are
    /// expected to have confirmed with the user before invoking this.
    /// Returns the seed collections so in-memory state can be swapped.
    pub fn reset(&self) -> Result<(Vec<Game>, Vec<Client>), StoreError> {
        self.store.delete(GAMES_KEY)?;
        self.store.delete(CLIENTS_KEY)?;

        let games = default_games();
        let clients = default_clients();
        self.save_games(&games)?;
        self.save_clients(&clients)?;
        info!("store reset to factory defaults");
        Ok((games, clients))
    }
}

/// Build a versioned, timestamped snapshot of the given collections.
pub fn export_snapshot(games: &[Game], clients: &[Client]) -> Snapshot {
    Snapshot {
        version: SNAPSHOT_VERSION.to_string(),
        export_date: Utc::now().to_rfc3339(),
        games: games.to_vec(),
        clients: clients.to_vec(),
    }
}

/// Parse and fully validate a snapshot file before anything is mutated.
///
/// `games` must be present and an array; `clients` may be omitted. Any
/// shape problem is reported as [`ImportError::Invalid`] with a reason a
/// user can act on.
pub fn parse_snapshot(json: &str) -> Result<Snapshot, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ImportError::Invalid(format!("not valid JSON: {e}")))?;

    match value.get("games") {
        None => {
            return Err(ImportError::Invalid(
                "missing required 'games' field".to_string(),
            ));
        }
        Some(games) if !games.is_array() => {
            return Err(ImportError::Invalid(
                "'games' must be an array".to_string(),
            ));
        }
        Some(_) => {}
    }

    serde_json::from_value(value)
        .map_err(|e| ImportError::Invalid(format!("unrecognized snapshot contents: {e}")))
}
