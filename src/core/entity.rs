//! Identifiers used throughout a session.
//!
//! ## ID Kinds
//!
//! - `CardId`: a card on the board, unique within one session
//! - `MatchKey`: shared by exactly the two cards that form a pair
//! - `Generation`: identity of a session, used to scope deferred tasks
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{CardId, Generation, MatchKey};
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//!
//! let key = MatchKey::new(1);
//! assert_eq!(key.to_string(), "pair-1");
//!
//! let first = Generation::initial();
//! assert!(first.next() > first);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a card on the board.
///
/// Card ids are the card's position in the dealt deck, so they run from
/// `0` to `2 * pair_count - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board position of the card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Key shared by the two cards of a pair.
///
/// Keys are minted fresh for every board, so they say nothing about
/// which content pair they came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey(pub u32);

impl MatchKey {
    /// Create a new match key.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pair-{}", self.0)
    }
}

/// Session generation.
///
/// Every new session gets the next generation. Deferred tasks carry the
/// generation that scheduled them and are dropped if it is no longer the
/// active one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation before any session has been started.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The generation that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_match_key_display() {
        assert_eq!(MatchKey::new(0).to_string(), "pair-0");
        assert_eq!(MatchKey::new(11).raw(), 11);
    }

    #[test]
    fn test_generation_ordering() {
        let g0 = Generation::initial();
        let g1 = g0.next();
        let g2 = g1.next();

        assert!(g0 < g1 && g1 < g2);
        assert_eq!(g2.raw(), 2);
        assert_eq!(format!("{}", g1), "Gen(1)");
    }

    #[test]
    fn test_ids_serde() {
        let json = serde_json::to_string(&(CardId::new(2), MatchKey::new(5))).unwrap();
        let (card, key): (CardId, MatchKey) = serde_json::from_str(&json).unwrap();
        assert_eq!(card, CardId::new(2));
        assert_eq!(key, MatchKey::new(5));
    }
}
