//! The board: cards and how they are dealt.
//!
//! ## Key Types
//!
//! - `Card`: Runtime card (content, match key, face)
//! - `CardFace`: Hidden, Revealed or Matched
//! - `generate_board`: Deals a shuffled board from a category

pub mod card;
pub mod generator;

pub use card::{Card, CardFace};
pub use generator::{check_pair_supply, generate_board};
