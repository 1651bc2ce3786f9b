//! Entitlement rules: who may download a game directly instead of buying it.
//!
//! This is the single canonical access predicate. Catalog cards, detail
//! pages, and hero banners must all route through [`can_access_directly`];
//! keeping one copy is what guarantees they agree.

use crate::types::{Client, Distribution, Game, Role, SubscriptionStatus};

/// Whether `user` may access `game` directly, without a purchase.
///
/// Physical games are never directly accessible, regardless of user state;
/// they are always charged through the normal cart path. For digital games,
/// access is granted to admins, Premium/VIP subscribers, and anyone who
/// already owns the game. An anonymous user gets no direct access.
pub fn can_access_directly(user: Option<&Client>, game: &Game) -> bool {
    if game.distribution != Distribution::Digital {
        return false;
    }
    let Some(user) = user else {
        return false;
    };
    user.role == Role::Admin
        || matches!(
            user.status,
            SubscriptionStatus::Premium | SubscriptionStatus::Vip
        )
        || user.owns(&game.id)
}

/// The price a game carries when placed in the cart.
///
/// Digital games are charged 0.0 regardless of any stored list price;
/// physical games charge the list price.
pub fn cart_price(game: &Game) -> f64 {
    if game.is_digital() { 0.0 } else { game.price }
}
