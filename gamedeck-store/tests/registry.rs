use gamedeck_catalog::default_clients;
use gamedeck_catalog::types::{Client, Role, SubscriptionStatus};
use gamedeck_store::{ClientPatch, ClientRegistry, RegistryError};

fn new_user(name: &str) -> Client {
    Client {
        id: String::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Role::User,
        status: SubscriptionStatus::Normal,
        is_subscribed: false,
        library: vec![],
    }
}

#[test]
fn add_assigns_fresh_id_and_dedups_library() {
    let mut registry = ClientRegistry::new(default_clients());
    let mut client = new_user("Maria");
    client.library = vec!["1".to_string(), "1".to_string(), "2".to_string()];

    let id = registry.add(client);
    let stored = registry.find(&id).unwrap();
    assert_eq!(stored.library, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(registry.list().len(), 3);
}

#[test]
fn update_merges_only_supplied_fields() {
    let mut registry = ClientRegistry::new(default_clients());

    let changed = registry
        .update(
            "u2",
            ClientPatch {
                status: Some(SubscriptionStatus::Premium),
                ..ClientPatch::default()
            },
        )
        .unwrap();
    assert!(changed);

    let client = registry.find("u2").unwrap();
    assert_eq!(client.status, SubscriptionStatus::Premium);
    // Everything not in the patch is untouched.
    assert_eq!(client.name, "Joao Silva");
    assert_eq!(client.library, vec!["3".to_string()]);
    assert!(!client.is_subscribed);
}

#[test]
fn update_of_unknown_id_is_a_benign_no_op() {
    let mut registry = ClientRegistry::new(default_clients());
    let changed = registry
        .update("nope", ClientPatch::default())
        .unwrap();
    assert!(!changed);
    assert_eq!(registry.list().len(), 2);
}

#[test]
fn deleting_an_admin_is_rejected_and_registry_unchanged() {
    let mut registry = ClientRegistry::new(default_clients());
    let before = registry.list().to_vec();

    let err = registry.delete("u1").unwrap_err();
    assert_eq!(err, RegistryError::AdminProtected("u1".to_string()));
    assert_eq!(registry.list(), before.as_slice());
}

#[test]
fn deleting_a_regular_user_works() {
    let mut registry = ClientRegistry::new(default_clients());
    assert!(registry.delete("u2").unwrap());
    assert!(registry.find("u2").is_none());
    assert!(!registry.delete("u2").unwrap());
}

#[test]
fn demoting_the_last_admin_is_rejected() {
    let mut registry = ClientRegistry::new(default_clients());

    let err = registry
        .update(
            "u1",
            ClientPatch {
                role: Some(Role::User),
                ..ClientPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, RegistryError::LastAdmin("u1".to_string()));
    assert_eq!(registry.find("u1").unwrap().role, Role::Admin);
}

#[test]
fn demotion_is_allowed_once_another_admin_exists() {
    let mut registry = ClientRegistry::new(default_clients());
    registry
        .update(
            "u2",
            ClientPatch {
                role: Some(Role::Admin),
                ..ClientPatch::default()
            },
        )
        .unwrap();

    let changed = registry
        .update(
            "u1",
            ClientPatch {
                role: Some(Role::User),
                ..ClientPatch::default()
            },
        )
        .unwrap();
    assert!(changed);
    assert_eq!(registry.find("u1").unwrap().role, Role::User);
}
