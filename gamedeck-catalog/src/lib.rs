//! Data model types, entitlement rules, and seed data for the GameDeck store.
//!
//! This crate defines the storefront data model without any persistence
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `gamedeck-db` for persistence.

pub mod entitlement;
pub mod seed;
pub mod types;

pub use entitlement::{can_access_directly, cart_price};
pub use seed::{default_clients, default_games, default_plans};
pub use types::*;
