//! The session-local cart.
//!
//! Ephemeral by design: the cart is never persisted and does not survive a
//! restart.

use gamedeck_catalog::types::CartLine;

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line unless one with the same id is already present.
    ///
    /// Idempotent: a duplicate add is a no-op returning `false`, and the
    /// first-added line is the one retained.
    pub fn add(&mut self, line: CartLine) -> bool {
        if self.lines.iter().any(|l| l.id == line.id) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Remove the line with the given id, if present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line prices. No tax or discount logic applies.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.price).sum()
    }

    /// Insertion-ordered view of the lines.
    pub fn list(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
