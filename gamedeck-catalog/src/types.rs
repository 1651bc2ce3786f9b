//! Data model types for the storefront.
//!
//! These types represent the persistent store schema: games, clients,
//! subscription plans, cart lines, and the backup snapshot. JSON field
//! names use camelCase so snapshots interchange with existing exports.

use serde::{Deserialize, Serialize};

// ── Game ────────────────────────────────────────────────────────────────────

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    /// List price. Always 0.0 for digital games; access to those is gated
    /// by entitlement, not by a line-item charge.
    pub price: f64,
    pub image: String,
    pub banner: String,
    /// Review score, 0.0–5.0.
    pub rating: f64,
    pub category: String,
    pub platform: String,
    pub release_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub distribution: Distribution,
    /// Direct-download location. Only meaningful for digital games.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Game {
    /// Whether this game is delivered as a direct digital download.
    pub fn is_digital(&self) -> bool {
        self.distribution == Distribution::Digital
    }
}

/// How a game is delivered to the buyer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    #[default]
    Physical,
    Digital,
}

// ── Client ──────────────────────────────────────────────────────────────────

/// A known account in the client registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: SubscriptionStatus,
    pub is_subscribed: bool,
    /// Ids of games this client owns. Unique, insertion ordered.
    #[serde(default)]
    pub library: Vec<String>,
}

impl Client {
    /// Whether the client's library contains the given game id.
    pub fn owns(&self, game_id: &str) -> bool {
        self.library.iter().any(|id| id == game_id)
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Subscription tier attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Normal,
    Premium,
    #[serde(rename = "VIP")]
    Vip,
}

// ── Plan ────────────────────────────────────────────────────────────────────

/// A static subscription tier definition. Not runtime-editable; the full
/// set comes from [`crate::seed::default_plans`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Monthly price.
    pub price: f64,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    /// Hidden plans are excluded from display and from purchase.
    #[serde(default)]
    pub is_hidden: bool,
}

// ── Cart ────────────────────────────────────────────────────────────────────

/// One line in the session cart. Unique by id within a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Matches a game id or a plan id.
    pub id: String,
    pub kind: LineKind,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    /// Tier details when the line is a plan.
    #[serde(default)]
    pub plan: Option<Plan>,
}

/// What a cart line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Game,
    Plan,
}

impl CartLine {
    /// Build a cart line for a game. Digital games always enter the cart
    /// at zero price regardless of the stored list price.
    pub fn for_game(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            kind: LineKind::Game,
            name: game.title.clone(),
            price: crate::entitlement::cart_price(game),
            image: Some(game.image.clone()),
            plan: None,
        }
    }

    /// Build a cart line for a subscription plan. Hidden plans are not
    /// purchasable and yield `None`.
    pub fn for_plan(plan: &Plan) -> Option<Self> {
        if plan.is_hidden {
            return None;
        }
        Some(Self {
            id: plan.id.clone(),
            kind: LineKind::Plan,
            name: plan.name.clone(),
            price: plan.price,
            image: None,
            plan: Some(plan.clone()),
        })
    }
}

// ── Snapshot ────────────────────────────────────────────────────────────────

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// The backup/restore unit: the full catalog and client registry bundled
/// with a version tag and export timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Only `games` is required on import, so the header fields are lenient.
    #[serde(default)]
    pub version: String,
    /// RFC 3339 timestamp of the export.
    #[serde(default)]
    pub export_date: String,
    pub games: Vec<Game>,
    #[serde(default)]
    pub clients: Vec<Client>,
}
