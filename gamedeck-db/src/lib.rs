//! Local persistence for the GameDeck store.
//!
//! Provides a SQLite-backed named-entry byte store (via rusqlite with the
//! bundled feature) and the gateway that serializes the catalog and client
//! registry to it, including snapshot export/import and factory reset.

pub mod gateway;
pub mod kv;

pub use gateway::{
    CLIENTS_KEY, GAMES_KEY, Gateway, ImportError, export_snapshot, parse_snapshot,
};
pub use kv::{KvStore, StoreError};
