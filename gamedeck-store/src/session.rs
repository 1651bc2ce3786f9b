//! Explicit session context.
//!
//! The current user is carried in a session object passed alongside the
//! registry rather than held as ambient global state, so callers always
//! see where identity comes from.

use gamedeck_catalog::types::{Client, Role};

use crate::registry::ClientRegistry;

#[derive(Debug, Default, Clone)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given client the current session user.
    pub fn select(&mut self, id: &str) {
        self.current = Some(id.to_string());
    }

    /// Drop the session pointer (anonymous browsing).
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Resolve the current client against the registry. A pointer to a
    /// record that no longer exists resolves to `None`.
    pub fn current<'a>(&self, registry: &'a ClientRegistry) -> Option<&'a Client> {
        self.current.as_deref().and_then(|id| registry.find(id))
    }

    /// Select the default session user: the first admin record, else the
    /// first record, else none.
    ///
    /// Invoked once by the composition root at startup; loading the
    /// registry has no session side effects on its own.
    pub fn select_default(&mut self, registry: &ClientRegistry) {
        let clients = registry.list();
        let default = clients
            .iter()
            .find(|c| c.role == Role::Admin)
            .or_else(|| clients.first());
        self.current = default.map(|c| c.id.clone());
    }
}
