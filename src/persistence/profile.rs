//! Remembered player identity.
//!
//! The last accepted player name is offered again at the next name prompt.
//! The store is injected into the controller rather than read from
//! process-wide state.

use crate::error::PersistenceError;

/// Where the remembered player name lives.
pub trait ProfileStore {
    /// The remembered name, if any.
    fn load_name(&self) -> Result<Option<String>, PersistenceError>;

    /// Remember `name` for next time.
    fn save_name(&mut self, name: &str) -> Result<(), PersistenceError>;
}
