//! Built-in seed dataset.
//!
//! Used on first run and whenever a persisted entry is missing or
//! unreadable, and restored wholesale by a factory reset.

use crate::types::{Client, Distribution, Game, Plan, Role, SubscriptionStatus};

fn game(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    rating: f64,
    category: &str,
    platform: &str,
    release_date: &str,
    tags: &[&str],
) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        image: format!("https://picsum.photos/400/600?random={id}"),
        banner: format!("https://picsum.photos/1920/1080?random={id}"),
        rating,
        category: category.to_string(),
        platform: platform.to_string(),
        release_date: release_date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        video_url: None,
        screenshots: Vec::new(),
        distribution: Distribution::Physical,
        download_url: None,
        is_featured: false,
    }
}

/// The default catalog: six titles, mixed physical and digital.
pub fn default_games() -> Vec<Game> {
    let mut cyber_drift = game(
        "1",
        "Cyber Drift 2077",
        "High-octane futuristic street racing through Neo-Tokyo. Customize \
         your ride and own the chrome asphalt.",
        59.99,
        4.8,
        "Racing",
        "PC",
        "2023-11-15",
        &["Cyberpunk", "Racing", "Multiplayer"],
    );
    cyber_drift.is_featured = true;
    cyber_drift.video_url = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string());
    cyber_drift.screenshots = (101..=103)
        .map(|n| format!("https://picsum.photos/1920/1080?random={n}"))
        .collect();

    let eldoria = game(
        "2",
        "Shadows of Eldoria",
        "An epic dark-fantasy RPG. Crawl dungeons, fight dragons, and uncover \
         the secrets of a forgotten kingdom.",
        49.99,
        4.9,
        "RPG",
        "Playstation 4",
        "2024-01-20",
        &["Fantasy", "RPG", "Open World"],
    );

    let galactic = game(
        "3",
        "Galactic Front",
        "Command your star fleet in real-time tactical battles. The galaxy is \
         at war and only you can bring peace.",
        39.99,
        4.5,
        "Strategy",
        "PC",
        "2023-09-10",
        &["Sci-Fi", "Strategy", "Space"],
    );

    let neon = game(
        "4",
        "Neon Assassin",
        "Stealth meets action in this cyberpunk thriller. Eliminate \
         high-profile targets without leaving a trace.",
        29.99,
        4.7,
        "Action",
        "Xbox 360",
        "2024-03-05",
        &["Stealth", "Action", "Singleplayer"],
    );

    let mut arena = game(
        "5",
        "Apex Legends: Arena",
        "The definitive battle royale, evolved. New heroes, new weapons, and \
         an intense arena mode.",
        0.0,
        4.6,
        "Shooter",
        "Playstation 3",
        "2022-05-12",
        &["FPS", "Battle Royale", "Free"],
    );
    arena.distribution = Distribution::Digital;
    arena.download_url = Some("https://downloads.gamedeck.example/apex-arena".to_string());

    let mythos = game(
        "6",
        "Mythos Reborn",
        "Ancient gods awaken. An action-adventure inspired by Greek mythology \
         with stunning visuals.",
        69.99,
        4.9,
        "Adventure",
        "Playstation 2",
        "2024-02-14",
        &["Mythology", "Action", "Story Rich"],
    );

    vec![cyber_drift, eldoria, galactic, neon, arena, mythos]
}

/// The default client registry: one admin/VIP subscriber and one
/// regular account.
pub fn default_clients() -> Vec<Client> {
    vec![
        Client {
            id: "u1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@gamedeck.example".to_string(),
            role: Role::Admin,
            status: SubscriptionStatus::Vip,
            is_subscribed: true,
            library: vec!["1".to_string(), "2".to_string()],
        },
        Client {
            id: "u2".to_string(),
            name: "Joao Silva".to_string(),
            email: "joao@email.example".to_string(),
            role: Role::User,
            status: SubscriptionStatus::Normal,
            is_subscribed: false,
            library: vec!["3".to_string()],
        },
    ]
}

fn plan(id: &str, name: &str, price: f64, features: &[&str]) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        features: features.iter().map(|f| f.to_string()).collect(),
        is_popular: false,
        is_hidden: false,
    }
}

/// The full plan roster, including hidden tiers. Callers presenting or
/// selling plans should filter on `is_hidden`.
pub fn default_plans() -> Vec<Plan> {
    let mut starter = plan("starter", "Starter", 1.00, &["Trial plan", "Limited access"]);
    starter.is_hidden = true;

    let basic = plan(
        "basic",
        "Basic",
        19.90,
        &["Up to 5 downloads per month", "Access to all games", "Email support"],
    );

    let mut premium = plan(
        "premium",
        "Premium",
        39.90,
        &[
            "Up to 15 downloads per month",
            "Access to all games",
            "Priority 24/7 support",
            "Maximum speed",
            "Early access to releases",
            "Ad free",
        ],
    );
    premium.is_popular = true;

    let ultimate = plan(
        "ultimate",
        "Ultimate",
        49.90,
        &[
            "Unlimited downloads",
            "Everything in Premium",
            "Exclusive games",
            "Simultaneous downloads",
            "Cloud library",
        ],
    );

    vec![starter, basic, premium, ultimate]
}
