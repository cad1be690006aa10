//! Item Entity
//!
//! A single completable task. Items are values: every change produces a new
//! `Item` carrying the same id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier, a creation timestamp in milliseconds.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, fixed at creation
    pub id: ItemId,
    /// Display text
    pub name: String,
    /// Completion flag
    pub done: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
        }
    }

    /// Copy of this item with `done` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_done(!self.done)
    }

    /// Copy of this item with `done` forced to `done`
    #[must_use]
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            done,
        }
    }

    /// Copy of this item with a new name
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            done: self.done,
        }
    }
}
