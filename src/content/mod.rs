//! Content: pairs, categories, and the catalog sessions are created from.
//!
//! ## Key Types
//!
//! - `Pair`: Two related content values (question/answer, symbol/symbol)
//! - `Category`: A named pool of pairs
//! - `Catalog`: Registry of categories and difficulties
//!
//! Content is static reference data and is never mutated by a session.

mod builtin;
pub mod catalog;
pub mod category;

pub use catalog::{Catalog, CatalogData};
pub use category::{Category, Pair};
