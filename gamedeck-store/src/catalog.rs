//! In-memory catalog of purchasable games.

use gamedeck_catalog::types::Game;

/// The ordered games collection. Persistence is the caller's concern;
/// every mutation here is purely in-memory.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    games: Vec<Game>,
}

impl CatalogStore {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Insert a new game at the front of the collection.
    ///
    /// Any caller-supplied id is discarded; a fresh time-based id unique
    /// among current items is assigned and returned. Digital games are
    /// normalized to a zero price.
    pub fn add(&mut self, mut game: Game) -> String {
        game.id = self.fresh_id();
        normalize(&mut game);
        let id = game.id.clone();
        self.games.insert(0, game);
        id
    }

    /// Replace the stored game with a matching id.
    ///
    /// Returns `false` (a benign no-op) when the id is unknown. The id
    /// itself is stable across updates.
    pub fn update(&mut self, mut game: Game) -> bool {
        normalize(&mut game);
        match self.games.iter_mut().find(|g| g.id == game.id) {
            Some(slot) => {
                *slot = game;
                true
            }
            None => false,
        }
    }

    /// Remove the game with the given id. Absent ids are a benign no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        self.games.len() != before
    }

    pub fn list(&self) -> &[Game] {
        &self.games
    }

    pub fn find(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Wholesale swap of the collection, used by import and factory reset.
    pub fn replace_all(&mut self, games: Vec<Game>) {
        self.games = games;
    }

    fn fresh_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        while self.games.iter().any(|g| g.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

/// Digital access is gated by entitlement, not a line-item charge, so a
/// digital game's stored price is forced to zero on every write.
fn normalize(game: &mut Game) {
    if game.is_digital() {
        game.price = 0.0;
    }
}
