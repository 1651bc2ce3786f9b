use gamedeck_catalog::types::{CartLine, Client, LineKind, Role, SubscriptionStatus};
use gamedeck_store::reconcile;

fn client_with_library(library: &[&str]) -> Client {
    Client {
        id: "u2".to_string(),
        name: "Buyer".to_string(),
        email: "buyer@example.com".to_string(),
        role: Role::User,
        status: SubscriptionStatus::Normal,
        is_subscribed: false,
        library: library.iter().map(|s| s.to_string()).collect(),
    }
}

fn game_line(id: &str) -> CartLine {
    CartLine {
        id: id.to_string(),
        kind: LineKind::Game,
        name: format!("Game {id}"),
        price: 10.0,
        image: None,
        plan: None,
    }
}

fn plan_line(id: &str) -> CartLine {
    CartLine {
        id: id.to_string(),
        kind: LineKind::Plan,
        name: format!("Plan {id}"),
        price: 19.90,
        image: None,
        plan: None,
    }
}

#[test]
fn reconcile_adds_unowned_games_and_sets_subscription() {
    let client = client_with_library(&["A"]);
    let lines = vec![game_line("A"), game_line("B"), plan_line("premium")];

    let updated = reconcile(&client, &lines);

    // A was already owned: the library grows by exactly one.
    assert_eq!(updated.library, vec!["A".to_string(), "B".to_string()]);
    assert!(updated.is_subscribed);
    // Input untouched.
    assert_eq!(client.library, vec!["A".to_string()]);
    assert!(!client.is_subscribed);
}

#[test]
fn reconcile_of_empty_cart_changes_nothing() {
    let client = client_with_library(&["A"]);
    let updated = reconcile(&client, &[]);
    assert_eq!(updated, client);
}

#[test]
fn plan_purchase_records_only_the_subscription_fact() {
    let client = client_with_library(&[]);
    let updated = reconcile(&client, &[plan_line("ultimate")]);

    assert!(updated.is_subscribed);
    // Tier is not persisted on the client record.
    assert_eq!(updated.status, SubscriptionStatus::Normal);
    assert!(updated.library.is_empty());
}
