//! In-memory storage backend.
//!
//! Keeps the encoded JSON string, so a reload goes through the same codec as
//! the browser backend. Clones share the same slot, which lets a test hand one
//! handle to the container and inspect or re-hydrate from another.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::codec;
use super::traits::ItemStorage;
use crate::domain::Item;
use crate::error::{StorageError, StorageResult};

#[derive(Debug, Default)]
struct Slot {
    raw: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

/// Shared in-memory storage slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<Slot>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with a raw stored value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.set_raw(raw);
        storage
    }

    /// Raw stored value, if any
    pub fn raw(&self) -> Option<String> {
        self.slot.raw.borrow().clone()
    }

    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.raw.borrow_mut() = Some(raw.into());
    }

    /// Number of successful saves so far
    pub fn writes(&self) -> usize {
        self.slot.writes.get()
    }

    /// Make subsequent saves fail, as a full quota would
    pub fn fail_writes(&self, fail: bool) {
        self.slot.fail_writes.set(fail);
    }
}

impl ItemStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Item>>> {
        match self.slot.raw.borrow().as_deref() {
            Some(raw) => codec::decode(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[Item]) -> StorageResult<()> {
        if self.slot.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        let raw = codec::encode(items)?;
        *self.slot.raw.borrow_mut() = Some(raw);
        self.slot.writes.set(self.slot.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn test_empty_load() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let items = vec![Item::new(ItemId(1), "a"), Item::new(ItemId(2), "b").toggled()];
        storage.save(&items).unwrap();

        let reader = storage.clone();
        assert_eq!(reader.load().unwrap(), Some(items));
        assert_eq!(reader.writes(), 1);
    }

    #[test]
    fn test_failing_writes_keep_old_value() {
        let storage = MemoryStorage::new();
        storage.save(&[Item::new(ItemId(1), "a")]).unwrap();

        storage.fail_writes(true);
        let err = storage.save(&[]).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        assert_eq!(storage.load().unwrap().map(|items| items.len()), Some(1));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_malformed_raw() {
        let storage = MemoryStorage::with_raw("{broken");
        assert!(matches!(storage.load(), Err(StorageError::Codec(_))));
    }
}
