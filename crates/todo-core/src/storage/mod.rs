//! Storage Layer
//!
//! Persistence capability for the item list plus its implementations.
//! The browser backend lives in the UI crate.

pub mod codec;
mod memory;
mod traits;

pub use memory::MemoryStorage;
pub use traits::ItemStorage;

/// Key under which the whole item list is stored
pub const STORAGE_KEY: &str = "todos";
