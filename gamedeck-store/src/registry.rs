//! In-memory registry of known client accounts.

use gamedeck_catalog::types::{Client, Role, SubscriptionStatus};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Admin accounts cannot be deleted.
    #[error("invalid operation: client '{0}' has the admin role and cannot be deleted")]
    AdminProtected(String),
    /// The registry must always retain at least one admin account.
    #[error("invalid operation: '{0}' is the last admin and cannot be demoted")]
    LastAdmin(String),
}

/// A partial update to a client record. Only the fields listed here are
/// mutable; unset fields leave the stored value unchanged.
#[derive(Debug, Default, Clone)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<SubscriptionStatus>,
    pub is_subscribed: Option<bool>,
    pub library: Option<Vec<String>>,
}

/// The ordered clients collection. Persistence is the caller's concern.
#[derive(Debug, Default, Clone)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Append a new client, assigning a fresh unique id (any supplied id is
    /// discarded) and deduplicating the library. Returns the assigned id.
    pub fn add(&mut self, mut client: Client) -> String {
        client.id = self.fresh_id();
        dedup_library(&mut client.library);
        let id = client.id.clone();
        self.clients.push(client);
        id
    }

    /// Merge a patch into the client with the given id.
    ///
    /// Unknown ids are a benign `Ok(false)`. Demoting the only remaining
    /// admin is rejected before any mutation.
    pub fn update(&mut self, id: &str, patch: ClientPatch) -> Result<bool, RegistryError> {
        let Some(index) = self.clients.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        if self.clients[index].role == Role::Admin
            && patch.role == Some(Role::User)
            && self.admin_count() == 1
        {
            return Err(RegistryError::LastAdmin(id.to_string()));
        }

        let client = &mut self.clients[index];
        if let Some(name) = patch.name {
            client.name = name;
        }
        if let Some(email) = patch.email {
            client.email = email;
        }
        if let Some(role) = patch.role {
            client.role = role;
        }
        if let Some(status) = patch.status {
            client.status = status;
        }
        if let Some(is_subscribed) = patch.is_subscribed {
            client.is_subscribed = is_subscribed;
        }
        if let Some(mut library) = patch.library {
            dedup_library(&mut library);
            client.library = library;
        }
        Ok(true)
    }

    /// Remove the client with the given id.
    ///
    /// Admin-role records are protected and rejected with an error before
    /// any mutation; unknown ids are a benign `Ok(false)`.
    pub fn delete(&mut self, id: &str) -> Result<bool, RegistryError> {
        let Some(index) = self.clients.iter().position(|c| c.id == id) else {
            return Ok(false);
        };
        if self.clients[index].role == Role::Admin {
            return Err(RegistryError::AdminProtected(id.to_string()));
        }
        self.clients.remove(index);
        Ok(true)
    }

    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    pub fn find(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Wholesale swap of the collection, used by import and factory reset.
    pub fn replace_all(&mut self, clients: Vec<Client>) {
        self.clients = clients;
    }

    fn admin_count(&self) -> usize {
        self.clients.iter().filter(|c| c.role == Role::Admin).count()
    }

    fn fresh_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        while self
            .clients
            .iter()
            .any(|c| c.id == format!("u{candidate}"))
        {
            candidate += 1;
        }
        format!("u{candidate}")
    }
}

fn dedup_library(library: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    library.retain(|id| seen.insert(id.clone()));
}
