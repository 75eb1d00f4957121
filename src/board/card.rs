//! Cards on the board.
//!
//! A card moves `Hidden → Revealed → {Matched | Hidden}`. `Matched` is
//! terminal for the rest of the session.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, MatchKey};

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, either awaiting evaluation or shown by a hint.
    Revealed,
    /// Paired with its partner. Stays face up.
    Matched,
}

/// A card dealt for one session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the session.
    pub id: CardId,

    /// Opaque content for the renderer.
    pub display_content: String,

    /// Shared with exactly one other card.
    pub match_key: MatchKey,

    /// Current face.
    pub face: CardFace,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, display_content: impl Into<String>, match_key: MatchKey) -> Self {
        Self {
            id,
            display_content: display_content.into(),
            match_key,
            face: CardFace::Hidden,
        }
    }

    /// Is the card currently revealed (but not matched)?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face == CardFace::Revealed
    }

    /// Has the card been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Should the renderer show the content?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face != CardFace::Hidden
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.match_key == other.match_key
    }

    pub(crate) fn reveal(&mut self) {
        if self.face == CardFace::Hidden {
            self.face = CardFace::Revealed;
        }
    }

    pub(crate) fn hide(&mut self) {
        if self.face == CardFace::Revealed {
            self.face = CardFace::Hidden;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }
}
