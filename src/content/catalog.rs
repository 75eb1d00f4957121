//! Catalog of categories and difficulties.
//!
//! The `Catalog` is the static reference data a session is created from.
//! Keys are looked up through an `FxHashMap`; listing keeps the order in
//! which entries were registered, so menus come out the way they were authored.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::builtin;
use super::category::Category;
use crate::core::Difficulty;
use crate::error::ConfigurationError;

/// Registry of categories and difficulties.
///
/// ## Example
///
/// ```
/// use memory_match::content::{Catalog, Category, Pair};
/// use memory_match::core::Difficulty;
///
/// let mut catalog = Catalog::new();
/// catalog
///     .add_category(Category::new("tiny", "Tiny").with_pair(Pair::symmetric("⭐")))
///     .unwrap();
/// catalog
///     .add_difficulty(Difficulty::new("one", "One", 1, 30, 1.0))
///     .unwrap();
///
/// assert_eq!(catalog.category("tiny").unwrap().pair_count(), 1);
/// assert!(catalog.category("huge").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    difficulties: Vec<Difficulty>,
    category_index: FxHashMap<String, usize>,
    difficulty_index: FxHashMap<String, usize>,
}

/// Serialized form of a catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in educational catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for category in builtin::categories() {
            catalog.categories.push(category);
        }
        for difficulty in builtin::difficulties() {
            catalog.difficulties.push(difficulty);
        }
        catalog.reindex();
        catalog
    }

    /// Build a catalog from its serialized form, validating every entry.
    pub fn from_data(data: CatalogData) -> Result<Self, ConfigurationError> {
        let mut catalog = Self::new();
        for category in data.categories {
            catalog.add_category(category)?;
        }
        for difficulty in data.difficulties {
            catalog.add_difficulty(difficulty)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let data: CatalogData =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        Self::from_data(data)
    }

    /// Export the catalog in its serialized form.
    #[must_use]
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            categories: self.categories.clone(),
            difficulties: self.difficulties.clone(),
        }
    }

    /// Register a category.
    pub fn add_category(&mut self, category: Category) -> Result<(), ConfigurationError> {
        if self.category_index.contains_key(&category.key) {
            return Err(ConfigurationError::DuplicateKey {
                kind: "category",
                key: category.key,
            });
        }
        self.category_index.insert(category.key.clone(), self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    /// Register a difficulty.
    pub fn add_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ConfigurationError> {
        difficulty.validate()?;
        if self.difficulty_index.contains_key(&difficulty.key) {
            return Err(ConfigurationError::DuplicateKey {
                kind: "difficulty",
                key: difficulty.key,
            });
        }
        self.difficulty_index.insert(difficulty.key.clone(), self.difficulties.len());
        self.difficulties.push(difficulty);
        Ok(())
    }

    /// Look up a category by key.
    pub fn category(&self, key: &str) -> Result<&Category, ConfigurationError> {
        self.category_index
            .get(key)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| ConfigurationError::UnknownCategory(key.to_string()))
    }

    /// Look up a difficulty by key.
    pub fn difficulty(&self, key: &str) -> Result<&Difficulty, ConfigurationError> {
        self.difficulty_index
            .get(key)
            .map(|&i| &self.difficulties[i])
            .ok_or_else(|| ConfigurationError::UnknownDifficulty(key.to_string()))
    }

    /// Categories in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Difficulties in registration order.
    pub fn difficulties(&self) -> impl Iterator<Item = &Difficulty> {
        self.difficulties.iter()
    }

    /// Difficulties that `category` has enough pairs for.
    pub fn playable_difficulties<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a Difficulty> + 'a {
        self.difficulties
            .iter()
            .filter(move |d| d.pair_count <= category.pair_count())
    }

    fn reindex(&mut self) {
        self.category_index = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key.clone(), i))
            .collect();
        self.difficulty_index = self
            .difficulties
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key.clone(), i))
            .collect();
    }
}
