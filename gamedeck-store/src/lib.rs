//! Runtime state for the GameDeck storefront.
//!
//! Holds the in-memory catalog store, client registry, session cart, and
//! session pointer, plus the checkout reconciler and the write-through
//! [`StoreService`] that keeps everything persisted via `gamedeck-db`.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod registry;
pub mod service;
pub mod session;

pub use cart::Cart;
pub use catalog::CatalogStore;
pub use checkout::{CheckoutError, PROCESSING_DELAY, reconcile};
pub use registry::{ClientPatch, ClientRegistry, RegistryError};
pub use service::{ServiceError, StoreService};
pub use session::Session;
