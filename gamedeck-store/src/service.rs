//! Write-through composition of the stores, cart, session, and gateway.
//!
//! Every mutating operation applies its change to a scratch copy, persists
//! the result, and only then commits in memory, so the persisted and
//! in-memory collections never diverge when a write fails.

use std::path::Path;
use std::time::Duration;

use gamedeck_catalog::entitlement::can_access_directly;
use gamedeck_catalog::types::{CartLine, Client, Game, Plan};
use gamedeck_db::{Gateway, ImportError, StoreError};
use log::info;
use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::CatalogStore;
use crate::checkout::{CheckoutError, PROCESSING_DELAY, reconcile};
use crate::registry::{ClientPatch, ClientRegistry, RegistryError};
use crate::session::Session;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The storefront core: catalog, client registry, cart, and session, kept
/// persisted through the gateway after every mutation.
pub struct StoreService {
    catalog: CatalogStore,
    registry: ClientRegistry,
    cart: Cart,
    session: Session,
    gateway: Gateway,
}

impl StoreService {
    /// Open the service against an on-disk store, loading both collections
    /// (seed data when an entry is missing or unreadable).
    ///
    /// No session is selected here; call [`select_default_session`] from
    /// the composition root.
    ///
    /// [`select_default_session`]: StoreService::select_default_session
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::with_gateway(Gateway::open(path)?)
    }

    /// Open the service against an in-memory store. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        Self::with_gateway(Gateway::open_memory()?)
    }

    /// Build the service on an already-opened gateway.
    pub fn with_gateway(gateway: Gateway) -> Result<Self, StoreError> {
        let catalog = CatalogStore::new(gateway.load_games()?);
        let registry = ClientRegistry::new(gateway.load_clients()?);
        Ok(Self {
            catalog,
            registry,
            cart: Cart::new(),
            session: Session::new(),
            gateway,
        })
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn games(&self) -> &[Game] {
        self.catalog.list()
    }

    pub fn find_game(&self, id: &str) -> Option<&Game> {
        self.catalog.find(id)
    }

    pub fn clients(&self) -> &[Client] {
        self.registry.list()
    }

    pub fn find_client(&self, id: &str) -> Option<&Client> {
        self.registry.find(id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn current_user(&self) -> Option<&Client> {
        self.session.current(&self.registry)
    }

    /// Whether the current session user may download the given game
    /// directly instead of buying it.
    pub fn can_download(&self, game_id: &str) -> bool {
        match self.catalog.find(game_id) {
            Some(game) => can_access_directly(self.current_user(), game),
            None => false,
        }
    }

    // ── Session ─────────────────────────────────────────────────────────

    /// Select the startup session user (first admin, else first record).
    pub fn select_default_session(&mut self) {
        self.session.select_default(&self.registry);
    }

    /// Switch the session to the given client. Returns `false` when the id
    /// is unknown, leaving the session unchanged.
    pub fn login(&mut self, client_id: &str) -> bool {
        if self.registry.find(client_id).is_none() {
            return false;
        }
        self.session.select(client_id);
        true
    }

    pub fn logout(&mut self) {
        self.session.clear();
    }

    // ── Catalog administration ──────────────────────────────────────────

    /// Add a game (fresh id assigned) and persist the catalog.
    pub fn add_game(&mut self, game: Game) -> Result<String, ServiceError> {
        let mut scratch = self.catalog.clone();
        let id = scratch.add(game);
        self.gateway.save_games(scratch.list())?;
        self.catalog = scratch;
        Ok(id)
    }

    /// Update a game in place and persist the catalog. Unknown ids are a
    /// benign `Ok(false)` and nothing is written.
    pub fn update_game(&mut self, game: Game) -> Result<bool, ServiceError> {
        let mut scratch = self.catalog.clone();
        if !scratch.update(game) {
            return Ok(false);
        }
        self.gateway.save_games(scratch.list())?;
        self.catalog = scratch;
        Ok(true)
    }

    /// Delete a game and persist the catalog. Unknown ids are a benign
    /// `Ok(false)` and nothing is written.
    pub fn delete_game(&mut self, id: &str) -> Result<bool, ServiceError> {
        let mut scratch = self.catalog.clone();
        if !scratch.delete(id) {
            return Ok(false);
        }
        self.gateway.save_games(scratch.list())?;
        self.catalog = scratch;
        Ok(true)
    }

    // ── Client administration ───────────────────────────────────────────

    /// Add a client (fresh id assigned) and persist the registry.
    pub fn add_client(&mut self, client: Client) -> Result<String, ServiceError> {
        let mut scratch = self.registry.clone();
        let id = scratch.add(client);
        self.gateway.save_clients(scratch.list())?;
        self.registry = scratch;
        Ok(id)
    }

    /// Patch a client and persist the registry. Unknown ids are a benign
    /// `Ok(false)`; demoting the last admin is rejected before mutation.
    pub fn update_client(&mut self, id: &str, patch: ClientPatch) -> Result<bool, ServiceError> {
        let mut scratch = self.registry.clone();
        if !scratch.update(id, patch)? {
            return Ok(false);
        }
        self.gateway.save_clients(scratch.list())?;
        self.registry = scratch;
        Ok(true)
    }

    /// Delete a client and persist the registry. Admin records are
    /// rejected; unknown ids are a benign `Ok(false)`.
    pub fn delete_client(&mut self, id: &str) -> Result<bool, ServiceError> {
        let mut scratch = self.registry.clone();
        if !scratch.delete(id)? {
            return Ok(false);
        }
        self.gateway.save_clients(scratch.list())?;
        self.registry = scratch;
        if self.session.current_id() == Some(id) {
            self.session.clear();
        }
        Ok(true)
    }

    // ── Cart ────────────────────────────────────────────────────────────

    /// Add a catalog game to the cart. Unknown ids and duplicate adds are
    /// no-ops returning `false`.
    pub fn add_game_to_cart(&mut self, game_id: &str) -> bool {
        match self.catalog.find(game_id) {
            Some(game) => self.cart.add(CartLine::for_game(game)),
            None => false,
        }
    }

    /// Add a subscription plan to the cart. Hidden plans and duplicate
    /// adds are no-ops returning `false`.
    pub fn add_plan_to_cart(&mut self, plan: &Plan) -> bool {
        match CartLine::for_plan(plan) {
            Some(line) => self.cart.add(line),
            None => false,
        }
    }

    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // ── Checkout ────────────────────────────────────────────────────────

    /// Complete a purchase for the current session user with the default
    /// simulated processing delay.
    pub async fn purchase(&mut self) -> Result<Client, CheckoutError> {
        self.purchase_with_delay(PROCESSING_DELAY).await
    }

    /// Complete a purchase with an explicit processing delay.
    ///
    /// All-or-nothing: the updated client list is persisted before anything
    /// is committed, so a storage failure leaves library, subscription
    /// flag, and cart untouched. An empty cart is a successful no-op.
    pub async fn purchase_with_delay(&mut self, delay: Duration) -> Result<Client, CheckoutError> {
        let Some(current) = self.current_user().cloned() else {
            return Err(CheckoutError::PaymentFailed(
                "no active session user".to_string(),
            ));
        };
        if self.cart.is_empty() {
            return Ok(current);
        }

        tokio::time::sleep(delay).await;

        let updated = reconcile(&current, self.cart.list());
        let mut scratch = self.registry.clone();
        let patch = ClientPatch {
            is_subscribed: Some(updated.is_subscribed),
            library: Some(updated.library.clone()),
            ..ClientPatch::default()
        };
        scratch
            .update(&current.id, patch)
            .map_err(|e| CheckoutError::PaymentFailed(e.to_string()))?;
        self.gateway.save_clients(scratch.list())?;
        self.registry = scratch;
        self.cart.clear();
        info!("purchase completed for client '{}'", current.id);
        Ok(updated)
    }

    // ── Backup, restore, reset ──────────────────────────────────────────

    /// Export the full store as a downloadable JSON snapshot.
    pub fn export_json(&self) -> Result<String, StoreError> {
        self.gateway
            .snapshot_json(self.catalog.list(), self.registry.list())
    }

    /// Import a snapshot, replacing both collections.
    ///
    /// The file is parsed and validated in full, then both entries are
    /// persisted, and only after that do the in-memory stores swap. A
    /// validation or storage failure leaves everything untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let snapshot = gamedeck_db::parse_snapshot(json)?;
        self.gateway.save_snapshot(&snapshot)?;
        self.catalog.replace_all(snapshot.games);
        self.registry.replace_all(snapshot.clients);
        self.drop_stale_session();
        Ok(())
    }

    /// Erase both persisted entries and restore the built-in defaults.
    ///
    /// Destructive; the caller is responsible for having confirmed with
    /// the user.
    pub fn reset_to_defaults(&mut self) -> Result<(), StoreError> {
        let (games, clients) = self.gateway.reset()?;
        self.catalog.replace_all(games);
        self.registry.replace_all(clients);
        self.drop_stale_session();
        Ok(())
    }

    /// Imports and resets can remove the record the session points at.
    fn drop_stale_session(&mut self) {
        let stale = self
            .session
            .current_id()
            .is_some_and(|id| self.registry.find(id).is_none());
        if stale {
            self.session.clear();
        }
    }
}
