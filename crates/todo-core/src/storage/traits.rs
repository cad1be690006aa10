//! Storage Layer - Core Trait
//!
//! Abstract persistence for the item list.
//! Implementations: browser localStorage, in-memory.

use crate::domain::Item;
use crate::error::StorageResult;

/// Load/save capability for the whole item list
///
/// The list is always written wholesale; there is no partial update.
pub trait ItemStorage {
    /// Read the stored list. `Ok(None)` when nothing was ever saved.
    fn load(&self) -> StorageResult<Option<Vec<Item>>>;

    /// Overwrite the stored list
    fn save(&self, items: &[Item]) -> StorageResult<()>;
}
