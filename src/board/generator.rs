//! Board generation.
//!
//! Draws `pair_count` pairs from a category without replacement, emits
//! two cards per pair sharing a fresh `MatchKey`, and shuffles the deck.
//! Card ids are assigned after the shuffle, so a card's id is its
//! position on the board.

use crate::board::card::Card;
use crate::content::Category;
use crate::core::{CardId, Difficulty, GameRng, MatchKey};
use crate::error::ConfigurationError;

/// Deal a shuffled board of `difficulty.pair_count` pairs from `category`.
///
/// Fails if the category has fewer pairs than the difficulty requires.
///
/// ```
/// use memory_match::board::generate_board;
/// use memory_match::content::Catalog;
/// use memory_match::core::GameRng;
///
/// let catalog = Catalog::builtin();
/// let math = catalog.category("math").unwrap();
/// let easy = catalog.difficulty("easy").unwrap();
///
/// let cards = generate_board(math, easy, &mut GameRng::new(1)).unwrap();
/// assert_eq!(cards.len(), 12);
/// ```
pub fn generate_board(
    category: &Category,
    difficulty: &Difficulty,
    rng: &mut GameRng,
) -> Result<Vec<Card>, ConfigurationError> {
    difficulty.validate()?;
    check_pair_supply(category, difficulty)?;

    let chosen = rng
        .sample_indices(category.pair_count(), difficulty.pair_count)
        .ok_or_else(|| not_enough_pairs(category, difficulty))?;

    let mut deck: Vec<(String, MatchKey)> = Vec::with_capacity(difficulty.card_count());
    for (key, &pair_index) in chosen.iter().enumerate() {
        let pair = &category.pairs[pair_index];
        let match_key = MatchKey::new(key as u32);
        deck.push((pair.front.clone(), match_key));
        deck.push((pair.back.clone(), match_key));
    }

    rng.shuffle(&mut deck);

    Ok(deck
        .into_iter()
        .enumerate()
        .map(|(position, (content, key))| Card::new(CardId::new(position as u32), content, key))
        .collect())
}

/// Check that `category` can supply a board for `difficulty`.
///
/// Run before any prompt that would otherwise lead to a failed deal.
pub fn check_pair_supply(
    category: &Category,
    difficulty: &Difficulty,
) -> Result<(), ConfigurationError> {
    if category.pair_count() < difficulty.pair_count {
        return Err(not_enough_pairs(category, difficulty));
    }
    Ok(())
}

fn not_enough_pairs(category: &Category, difficulty: &Difficulty) -> ConfigurationError {
    ConfigurationError::NotEnoughPairs {
        category: category.key.clone(),
        difficulty: difficulty.key.clone(),
        available: category.pair_count(),
        required: difficulty.pair_count,
    }
}
