//! Domain Layer
//!
//! Plain data types shared by the state container and the UI.
//! No dependencies besides serde.

mod item;

pub use item::{Item, ItemId};
