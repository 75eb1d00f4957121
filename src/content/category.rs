//! Categories and the pairs they are authored from.
//!
//! A `Pair` is the authored unit: a front and a back that belong together,
//! like a question and its answer, or the same symbol twice. Content is
//! opaque text; the engine never looks inside it.

use serde::{Deserialize, Serialize};

/// Two related content values that match each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Content shown on the first card.
    pub front: String,

    /// Content shown on the second card.
    pub back: String,
}

impl Pair {
    /// Create a pair with distinct faces.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Create a pair whose two cards show the same content.
    pub fn symmetric(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            front: content.clone(),
            back: content,
        }
    }
}

/// A named pool of pairs.
///
/// ## Example
///
/// ```
/// use memory_match::content::{Category, Pair};
///
/// let math = Category::new("math", "Math")
///     .with_icon("🔢")
///     .with_pair(Pair::new("2 + 3", "5"))
///     .with_pair(Pair::new("4 × 2", "8"));
///
/// assert_eq!(math.pair_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key (`math`, `science`, ...), stored in game records.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Display icon.
    #[serde(default)]
    pub icon: String,

    /// Pair pool boards are dealt from.
    pub pairs: Vec<Pair>,
}

impl Category {
    /// Create an empty category.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: String::new(),
            pairs: Vec::new(),
        }
    }

    /// Set the display icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Add a pair (builder pattern).
    #[must_use]
    pub fn with_pair(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// Add several pairs (builder pattern).
    #[must_use]
    pub fn with_pairs(mut self, pairs: impl IntoIterator<Item = Pair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Number of pairs available.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
